//! Archive assembly and download naming.
//!
//! Rendered project files are packed through the [`Archiver`] capability
//! so tests can capture emitted entries without touching the zip format.
//! The production [`ZipArchiver`] produces a deflate archive at maximum
//! compression, built fully in memory.

use std::io::{Cursor, Write};

use zip::{CompressionMethod, write::FileOptions};

use sitesmith_shared::{ProjectFile, Result, SitesmithError};

// ---------------------------------------------------------------------------
// Archiver
// ---------------------------------------------------------------------------

/// Archive-writer capability: packs rendered project files into a single
/// downloadable byte buffer.
pub trait Archiver: Send + Sync {
    /// Pack `files` in order and return the finished archive bytes.
    fn archive(&self, files: &[ProjectFile]) -> Result<Vec<u8>>;
}

/// Production archiver producing a deflate zip at maximum compression.
pub struct ZipArchiver;

impl Archiver for ZipArchiver {
    fn archive(&self, files: &[ProjectFile]) -> Result<Vec<u8>> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options: FileOptions<'_, ()> = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(9));

        for file in files {
            zip.start_file(file.relative_path.as_str(), options)
                .map_err(|e| {
                    SitesmithError::Archive(format!(
                        "failed to add {}: {e}",
                        file.relative_path
                    ))
                })?;
            zip.write_all(&file.content).map_err(|e| {
                SitesmithError::Archive(format!(
                    "failed to write {}: {e}",
                    file.relative_path
                ))
            })?;
        }

        let cursor = zip
            .finish()
            .map_err(|e| SitesmithError::Archive(format!("failed to finalize archive: {e}")))?;

        Ok(cursor.into_inner())
    }
}

// ---------------------------------------------------------------------------
// Download naming
// ---------------------------------------------------------------------------

/// Name the archive download for a given business title.
pub fn archive_file_name(title: &str) -> String {
    format!("{}-template.zip", slugify_title(title))
}

/// Lower-case the title and collapse each run of whitespace into a single
/// hyphen. No other characters are transformed; the download name keeps
/// accents and punctuation as typed.
fn slugify_title(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.push(ch);
            in_whitespace = false;
        }
    }

    slug
}
