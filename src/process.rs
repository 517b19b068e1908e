//! Batch driver: run every candidate through the pipeline and log outcomes.
//!
//! Per-file work returns a [`FileOutcome`]; nothing below this module writes
//! to the run log. [`record_outcome`] is the single place where outcomes
//! become log lines, and no per-file outcome stops the batch.

use crate::config::RenameConfig;
use crate::error::RenameError;
use crate::log_sink::LogSink;
use crate::outcome::{FileOutcome, RunSummary};
use crate::pipeline::ocr::{self, OcrEngine, TesseractEngine};
use crate::pipeline::render::{PageRasterizer, PdfiumRasterizer};
use crate::pipeline::{extract, rename, scan};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Knobs that affect logging rather than what happens to files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    /// Log successful renames as well as failures.
    pub log_renames: bool,
}

impl From<&RenameConfig> for ProcessOptions {
    fn from(config: &RenameConfig) -> Self {
        Self {
            log_renames: config.log_renames,
        }
    }
}

/// Take one document from START to a terminal state.
pub fn process_file(
    path: &Path,
    rasterizer: &dyn PageRasterizer,
    engine: &dyn OcrEngine,
) -> FileOutcome {
    let image = match rasterizer.first_page(path) {
        Ok(Some(image)) => image,
        Ok(None) => {
            return FileOutcome::EmptyDocument {
                path: path.to_path_buf(),
            }
        }
        Err(e) => return FileOutcome::Failed(e),
    };

    let text = match ocr::page_text(engine, &image, path) {
        Ok(text) => text,
        Err(e) => return FileOutcome::Failed(e),
    };
    drop(image);

    match extract::order_number(&text) {
        Ok(order) => rename::rename_to_order(path, order),
        Err(e) => FileOutcome::from_extract_error(path.to_path_buf(), e),
    }
}

/// Write the log line for `outcome`, if it gets one.
pub fn record_outcome(sink: &LogSink, outcome: &FileOutcome, options: ProcessOptions) {
    if outcome.is_renamed() && !options.log_renames {
        debug!("{outcome}");
        return;
    }
    sink.record(outcome);
}

/// Process already-scanned candidates one at a time.
pub fn process_candidates(
    candidates: impl IntoIterator<Item = PathBuf>,
    rasterizer: &dyn PageRasterizer,
    engine: &dyn OcrEngine,
    sink: &LogSink,
    options: ProcessOptions,
) -> RunSummary {
    let mut summary = RunSummary::default();
    for path in candidates {
        let outcome = process_file(&path, rasterizer, engine);
        record_outcome(sink, &outcome, options);
        summary.tally(&outcome);
    }
    info!(
        "Processed {} files: {} renamed, {} left in place",
        summary.scanned,
        summary.renamed,
        summary.scanned - summary.renamed
    );
    summary
}

/// Scan `folder` and process every candidate.
///
/// A missing folder is logged once and yields [`RunSummary::folder_missing`].
pub fn process_folder(
    folder: &Path,
    rasterizer: &dyn PageRasterizer,
    engine: &dyn OcrEngine,
    sink: &LogSink,
    options: ProcessOptions,
) -> RunSummary {
    match scan::candidates(folder) {
        Ok(candidates) => process_candidates(candidates, rasterizer, engine, sink, options),
        Err(e) => {
            sink.record(&e);
            RunSummary::folder_missing()
        }
    }
}

/// Run a whole batch as configured: open the log, scan, bind pdfium, process.
///
/// The folder is checked before pdfium is bound, so a missing folder ends the
/// run with a log line and `Ok` even where no PDF engine is installed. The
/// only `Err` is a PDF engine that cannot be bound; it is logged first.
pub fn run(config: &RenameConfig) -> Result<RunSummary, RenameError> {
    let sink = LogSink::open(&config.log_file);

    let candidates = match scan::candidates(&config.folder) {
        Ok(candidates) => candidates,
        Err(e) => {
            sink.record(&e);
            return Ok(RunSummary::folder_missing());
        }
    };

    let rasterizer =
        match PdfiumRasterizer::bind(config.pdfium_lib_path.as_deref(), config.render_scale) {
            Ok(r) => r,
            Err(e) => {
                sink.record(&e);
                return Err(e);
            }
        };
    let engine = TesseractEngine::new(&config.tesseract_cmd, config.tesseract_lang.clone());

    Ok(process_candidates(
        candidates,
        &rasterizer,
        &engine,
        &sink,
        ProcessOptions::from(config),
    ))
}
