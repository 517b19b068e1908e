//! Result types: what happened to each file, and to the run as a whole.

use crate::error::{ExtractError, FileError};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Terminal state of one document.
///
/// ```text
/// START ─┬─ EmptyDocument | Failed           (rasterise / OCR)
///        └─ NoMarker | TooShort | candidate  (extract)
///                                 └─ Renamed | RenameFailed
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The file now carries its order number.
    Renamed { from: PathBuf, to: PathBuf },
    /// The PDF has no pages; nothing was recognised.
    EmptyDocument { path: PathBuf },
    /// The recognised text has no order marker.
    NoMarker { path: PathBuf },
    /// The marker is too close to the end of the text.
    TooShort { path: PathBuf, available: usize },
    /// A destination was chosen but the move failed; the source is untouched.
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },
    /// Opening, rendering or recognising the document failed.
    Failed(FileError),
}

impl FileOutcome {
    /// Map an extraction failure for `path` to its terminal state.
    pub fn from_extract_error(path: PathBuf, err: ExtractError) -> Self {
        match err {
            ExtractError::MarkerNotFound => FileOutcome::NoMarker { path },
            ExtractError::InsufficientLength { available } => {
                FileOutcome::TooShort { path, available }
            }
        }
    }

    pub fn is_renamed(&self) -> bool {
        matches!(self, FileOutcome::Renamed { .. })
    }
}

impl fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileOutcome::Renamed { from, to } => {
                write!(f, "Renamed {} to {}", from.display(), to.display())
            }
            FileOutcome::EmptyDocument { path } => {
                write!(f, "No pages found in {}", path.display())
            }
            FileOutcome::NoMarker { path } => write!(
                f,
                "Order number extraction failed for {}: {}",
                path.display(),
                ExtractError::MarkerNotFound
            ),
            FileOutcome::TooShort { path, available } => write!(
                f,
                "Order number extraction failed for {}: {}",
                path.display(),
                ExtractError::InsufficientLength {
                    available: *available
                }
            ),
            FileOutcome::RenameFailed { from, to, reason } => write!(
                f,
                "Error renaming {} to {}: {}",
                from.display(),
                to.display(),
                reason
            ),
            FileOutcome::Failed(e) => write!(f, "{e}"),
        }
    }
}

/// Per-run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// The input folder did not exist; nothing was scanned.
    pub folder_missing: bool,
    /// Candidate PDFs visited.
    pub scanned: usize,
    pub renamed: usize,
    pub empty: usize,
    pub no_marker: usize,
    pub too_short: usize,
    pub rename_failed: usize,
    /// Open, render or OCR failures.
    pub failed: usize,
}

impl RunSummary {
    pub fn folder_missing() -> Self {
        Self {
            folder_missing: true,
            ..Self::default()
        }
    }

    /// Count one outcome.
    pub fn tally(&mut self, outcome: &FileOutcome) {
        self.scanned += 1;
        let slot = match outcome {
            FileOutcome::Renamed { .. } => &mut self.renamed,
            FileOutcome::EmptyDocument { .. } => &mut self.empty,
            FileOutcome::NoMarker { .. } => &mut self.no_marker,
            FileOutcome::TooShort { .. } => &mut self.too_short,
            FileOutcome::RenameFailed { .. } => &mut self.rename_failed,
            FileOutcome::Failed(_) => &mut self.failed,
        };
        *slot += 1;
    }
}
