//! Error types for the packlist-rename library.
//!
//! Failures fall into three tiers:
//!
//! * [`RenameError`] is **fatal**: the run cannot start at all (invalid
//!   configuration, no PDF engine). Returned as `Err` from [`crate::run`].
//!
//! * [`FileError`] is **per-file**: one document could not be opened, rendered
//!   or recognised. Stored inside [`crate::outcome::FileOutcome::Failed`] and
//!   logged; the batch moves on to the next file.
//!
//! * [`ExtractError`] / [`ScanError`] / [`LogSinkUnavailable`]: expected
//!   conditions reported by a single stage and turned into one log line by
//!   the dispatcher in [`crate::process`].

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors returned before any file is processed.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Could not bind to a pdfium library.
    #[error(
        "Failed to bind to pdfium library: {0}\n\
Install libpdfium system-wide or set PDFIUM_LIB_PATH=/path/to/libpdfium."
    )]
    PdfiumBindingFailed(String),
}

/// A failure confined to a single document.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileError {
    /// The bytes are not a parseable PDF, or the file could not be read.
    #[error("Could not open {path}: {detail}")]
    DocumentOpen { path: PathBuf, detail: String },

    /// pdfium opened the document but could not render its first page.
    #[error("Rasterisation failed for {path}: {detail}")]
    Rasterisation { path: PathBuf, detail: String },

    /// The OCR engine could not be run on the rendered page.
    #[error("OCR failed for {path}: {detail}")]
    Ocr { path: PathBuf, detail: String },
}

impl FileError {
    /// Path of the document the error belongs to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            FileError::DocumentOpen { path, .. }
            | FileError::Rasterisation { path, .. }
            | FileError::Ocr { path, .. } => path,
        }
    }
}

/// Why no order number could be sliced out of the recognised text.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// The marker literal does not occur in the text.
    #[error("marker not found")]
    MarkerNotFound,

    /// The marker occurs but fewer characters than an order number follow it.
    #[error("insufficient length ({available} characters after marker)")]
    InsufficientLength { available: usize },
}

/// Why the input folder could not be enumerated.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The folder does not exist or is not a directory.
    #[error("Folder not found: {path}")]
    FolderNotFound { path: PathBuf },

    /// The folder exists but listing it failed.
    #[error("Folder unreadable: {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The run log could not be opened for appending.
#[derive(Debug, Error)]
#[error("Log file '{path}' unavailable: {source}")]
pub struct LogSinkUnavailable {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
