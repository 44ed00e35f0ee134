//! Core domain types for Sitesmith template generation.

use serde::{Deserialize, Serialize};

/// Number of posts rendered into every generated project: extraction caps
/// at this many accepted links, and the placeholder fallback emits exactly
/// this many entries.
pub const MAX_POSTS: usize = 3;

// ---------------------------------------------------------------------------
// PostEntry
// ---------------------------------------------------------------------------

/// A single content link extracted from the scraped page, or a placeholder.
///
/// Serialized verbatim into the generated component, so the wire field
/// names (`title`, `link`) are part of the output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEntry {
    /// Display title, non-empty after trimming.
    pub title: String,
    /// Absolute link, or `"#"` for placeholder entries.
    pub link: String,
}

// ---------------------------------------------------------------------------
// Branding
// ---------------------------------------------------------------------------

/// Branding fields submitted with a generation request.
#[derive(Debug, Clone)]
pub struct Branding {
    /// Business title. Required; the boundary rejects requests without it.
    pub title: String,
    /// Street address, empty when not provided.
    pub address: String,
    /// Contact phone number, empty when not provided.
    pub phone: String,
    /// Contact email, empty when not provided.
    pub email: String,
}

/// Uploaded logo image and its declared media type.
#[derive(Debug, Clone)]
pub struct Logo {
    /// Media type from the upload (e.g., `image/png`).
    pub media_type: String,
    /// Raw image bytes.
    pub data: Vec<u8>,
}

// ---------------------------------------------------------------------------
// ProjectFile
// ---------------------------------------------------------------------------

/// A single file of the generated project tree.
///
/// The synthesizer produces an ordered set of these; no two entries share
/// a `relative_path`.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    /// Path relative to the project root (e.g., `src/App.js`).
    pub relative_path: String,
    /// File contents.
    pub content: Vec<u8>,
}

impl ProjectFile {
    /// Build a project file from UTF-8 text content.
    pub fn text(relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            content: content.into().into_bytes(),
        }
    }
}
