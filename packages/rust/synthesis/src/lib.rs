//! Project synthesis: deterministic file-tree rendering plus archive
//! assembly.
//!
//! This crate provides:
//! - [`template`] — Renders the four-file React starter for a request
//! - [`archive`] — The [`Archiver`] capability and download naming
//! - [`Synthesizer`] — Composes rendering and archiving per request

pub mod archive;
pub mod template;

use std::sync::Arc;

use tracing::{debug, instrument};

use sitesmith_shared::{Branding, Logo, PostEntry, Result};

pub use archive::{Archiver, ZipArchiver, archive_file_name};
pub use template::{logo_data_uri, project_files};

/// Builds a downloadable project archive from branding and posts.
pub struct Synthesizer {
    archiver: Arc<dyn Archiver>,
}

impl Synthesizer {
    /// Create a synthesizer with the production zip archiver.
    pub fn new() -> Self {
        Self {
            archiver: Arc::new(ZipArchiver),
        }
    }

    /// Create a synthesizer with a custom archive writer (used by tests).
    pub fn with_archiver(archiver: Arc<dyn Archiver>) -> Self {
        Self { archiver }
    }

    /// Render the project tree for `branding` and `posts`, then pack it
    /// into an archive, fully in memory.
    ///
    /// Any rendering or archive-write failure is fatal to the request;
    /// there is no partial success.
    #[instrument(skip_all, fields(title = %branding.title, posts = posts.len()))]
    pub fn build(
        &self,
        branding: &Branding,
        logo: Option<&Logo>,
        posts: &[PostEntry],
    ) -> Result<Vec<u8>> {
        let files = template::project_files(branding, logo, posts)?;
        let bytes = self.archiver.archive(&files)?;

        debug!(
            files = files.len(),
            bytes = bytes.len(),
            "project archive assembled"
        );
        Ok(bytes)
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}
