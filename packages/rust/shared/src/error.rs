//! Error types for Sitesmith.
//!
//! Library crates use [`SitesmithError`] via `thiserror`.
//! The server app maps these onto HTTP responses and wraps `main`
//! with `color-eyre` for rich diagnostics.

/// Top-level error type for all Sitesmith operations.
#[derive(Debug, thiserror::Error)]
pub enum SitesmithError {
    /// Network/HTTP error during the outbound page fetch.
    #[error("network error: {0}")]
    Network(String),

    /// URL or markup handling error during extraction.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Project file rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// Archive assembly error.
    #[error("archive error: {0}")]
    Archive(String),

    /// Server startup or listener error.
    #[error("server error: {0}")]
    Server(String),
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, SitesmithError>;

impl SitesmithError {
    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = SitesmithError::parse("invalid URL: not-a-url");
        assert_eq!(err.to_string(), "parse error: invalid URL: not-a-url");

        let err = SitesmithError::Archive("failed to add src/App.js".into());
        assert!(err.to_string().contains("src/App.js"));
    }
}
