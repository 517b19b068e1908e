//! # packlist-rename
//!
//! Rename scanned packing-list PDFs after the order number printed on them.
//!
//! Scanners produce files named `scan_0042.pdf`; the warehouse wants
//! `Packlist_AB123456.pdf`. This crate renders the first page of every PDF in
//! a folder, runs tesseract on it, looks for the `"Order# "` marker and
//! renames the file to embed the eight characters that follow, without ever
//! overwriting an existing file.
//!
//! ## Pipeline Overview
//!
//! ```text
//! folder
//!  │
//!  ├─ 1. Scan     *.pdf without the Packlist_ prefix (lazy, top level only)
//!  ├─ 2. Render   page 0 via pdfium at 2x scale, RGB
//!  ├─ 3. OCR      tesseract CLI, line breaks flattened to spaces
//!  ├─ 4. Extract  8 characters after "Order# "
//!  └─ 5. Rename   Packlist_<order>.pdf, then (1), (2), … on collision
//! ```
//!
//! Every file ends in one [`FileOutcome`]; the only trace of a failure is a
//! line in the run log ([`LogSink`]). A missing folder ends the run early but
//! is not an error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use packlist_rename::{run, RenameConfig};
//!
//! let config = RenameConfig::builder()
//!     .folder("/srv/scans/incoming")
//!     .build()?;
//! let summary = run(&config)?;
//! eprintln!("{} of {} renamed", summary.renamed, summary.scanned);
//! # Ok::<(), packlist_rename::RenameError>(())
//! ```
//!
//! ## Plugging in other engines
//!
//! [`process_folder`] takes any [`PageRasterizer`] and [`OcrEngine`], which is
//! how the integration tests run the pipeline without pdfium or tesseract.
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `packlist-rename` binary (clap + anyhow + tracing-subscriber) |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod log_sink;
pub mod outcome;
pub mod pipeline;
pub mod process;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{RenameConfig, RenameConfigBuilder};
pub use error::{ExtractError, FileError, LogSinkUnavailable, RenameError, ScanError};
pub use log_sink::LogSink;
pub use outcome::{FileOutcome, RunSummary};
pub use pipeline::ocr::{OcrEngine, TesseractEngine};
pub use pipeline::render::{PageRasterizer, PdfiumRasterizer};
pub use process::{process_candidates, process_file, process_folder, run, ProcessOptions};
