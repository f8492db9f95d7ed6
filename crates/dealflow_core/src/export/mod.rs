//! Markdown document exporters.
//!
//! # Responsibility
//! - Render deal and portfolio data into Markdown text.
//! - Save rendered documents under a caller-chosen directory.
//!
//! # Invariants
//! - Rendering is pure: same input and date yield byte-identical output.
//! - File names are derived from entity name or date only.

pub mod lp_report;
pub mod memo;

use log::info;
use std::error::Error;
use std::ffi::OsStr;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub use lp_report::lp_report;
pub use memo::investment_memo;

pub const MARKDOWN_MEDIA_TYPE: &str = "text/markdown";

pub type ExportResult<T> = Result<T, ExportError>;

#[derive(Debug)]
pub enum ExportError {
    /// Filename is not a single plain path component.
    InvalidFilename(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFilename(name) => write!(f, "invalid export filename `{name}`"),
            Self::Io { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::InvalidFilename(_) => None,
        }
    }
}

/// Rendered document ready to be saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub filename: String,
    pub media_type: &'static str,
    pub content: String,
}

impl ExportedDocument {
    pub fn markdown(filename: String, content: String) -> Self {
        Self {
            filename,
            media_type: MARKDOWN_MEDIA_TYPE,
            content,
        }
    }

    /// Writes the document into `dir`, creating it if needed, and returns the
    /// written path. An existing file with the same name is overwritten.
    ///
    /// # Errors
    /// - `InvalidFilename` when `filename` would resolve outside `dir`.
    /// - `Io` when the directory or file cannot be written.
    pub fn save_to(&self, dir: &Path) -> ExportResult<PathBuf> {
        let as_path = Path::new(&self.filename);
        if as_path.file_name() != Some(OsStr::new(&self.filename)) {
            return Err(ExportError::InvalidFilename(self.filename.clone()));
        }
        std::fs::create_dir_all(dir).map_err(|source| ExportError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(&self.filename);
        std::fs::write(&path, self.content.as_bytes()).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        info!(
            "event=export_saved module=export file={} bytes={}",
            self.filename,
            self.content.len()
        );
        Ok(path)
    }
}
