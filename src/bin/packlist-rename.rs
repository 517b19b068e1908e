//! CLI binary for packlist-rename.
//!
//! A thin shim over the library crate that maps flags (each backed by an
//! environment variable) to `RenameConfig` and runs one batch. The binary is
//! silent on success; what happened to each file is in the run log.

use anyhow::{Context, Result};
use clap::Parser;
use packlist_rename::{config, run, RenameConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Rename everything in the folder from PDF_RENAME_FOLDER (or ./test_pdfs)
  packlist-rename

  # Explicit folder and log file
  packlist-rename --folder /srv/scans/incoming --log-file /var/log/packlist.log

  # Tesseract outside PATH, German + English language packs
  packlist-rename --tesseract /opt/tesseract/bin/tesseract --lang deu+eng

  # Record successful renames too, print a JSON summary
  packlist-rename --log-renames --json

NAMING:
  The first page is searched for "Order# " and the next 8 characters become
  the order number: scan_0042.pdf -> Packlist_AB123456.pdf. Existing names are
  never overwritten; Packlist_AB123456(1).pdf, (2), ... are used instead.
  Files already starting with "Packlist_" are skipped, so re-running is safe.

ENVIRONMENT VARIABLES:
  PDF_RENAME_FOLDER       Input folder
  PATH_TO_ERROR_LOGS      Run log file (default: <tmp>/ocr_log_<date>.log)
  TESSERACT_CMD           Tesseract executable
  TESSERACT_LANG          Tesseract language pack(s)
  PDFIUM_LIB_PATH         Path to libpdfium (default: system library)
  RUST_LOG                Overrides the stderr diagnostics filter
"#;

/// Rename packing-list PDFs after the order number found by OCR.
#[derive(Parser, Debug)]
#[command(
    name = "packlist-rename",
    version,
    about = "Rename packing-list PDFs after the order number found by OCR",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Folder containing the PDFs to rename.
    #[arg(long, env = "PDF_RENAME_FOLDER", default_value = config::DEFAULT_FOLDER)]
    folder: PathBuf,

    /// Append-only run log.
    #[arg(long, env = "PATH_TO_ERROR_LOGS")]
    log_file: Option<PathBuf>,

    /// Tesseract executable.
    #[arg(long = "tesseract", env = "TESSERACT_CMD", default_value = "tesseract")]
    tesseract_cmd: PathBuf,

    /// Tesseract language pack(s), e.g. eng or deu+eng.
    #[arg(long, env = "TESSERACT_LANG", default_value = "eng")]
    lang: String,

    /// Path to the pdfium shared library.
    #[arg(long, env = "PDFIUM_LIB_PATH")]
    pdfium_lib: Option<PathBuf>,

    /// Page scale factor before OCR (1.0 = 72 DPI).
    #[arg(long, env = "PDF_RENAME_SCALE", default_value_t = config::DEFAULT_RENDER_SCALE)]
    scale: f32,

    /// Also log successful renames.
    #[arg(long, env = "PDF_RENAME_LOG_RENAMES")]
    log_renames: bool,

    /// Print a JSON run summary to stdout.
    #[arg(long, env = "PDF_RENAME_JSON")]
    json: bool,

    /// Enable DEBUG-level diagnostics on stderr.
    #[arg(short, long, env = "PDF_RENAME_VERBOSE")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The run log is the user-facing record; stderr only carries warnings
    // (e.g. an unwritable run log) unless --verbose is given.
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli)?;
    let summary = run(&config).context("Rename run aborted")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?
        );
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<RenameConfig> {
    let mut builder = RenameConfig::builder()
        .folder(&cli.folder)
        .tesseract_cmd(&cli.tesseract_cmd)
        .tesseract_lang(cli.lang.clone())
        .render_scale(cli.scale)
        .log_renames(cli.log_renames);

    if let Some(ref path) = cli.log_file {
        builder = builder.log_file(path);
    }
    if let Some(ref path) = cli.pdfium_lib {
        builder = builder.pdfium_lib_path(path);
    }

    builder.build().context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "packlist-rename",
            "--folder",
            "/scans",
            "--log-file",
            "/logs/run.log",
            "--lang",
            "deu",
            "--scale",
            "3",
            "--log-renames",
        ])
        .unwrap();
        let config = build_config(&cli).unwrap();
        assert_eq!(config.folder, PathBuf::from("/scans"));
        assert_eq!(config.log_file, PathBuf::from("/logs/run.log"));
        assert_eq!(config.tesseract_lang, "deu");
        assert_eq!(config.render_scale, 3.0);
        assert!(config.log_renames);
    }

    #[test]
    fn invalid_scale_is_rejected() {
        let cli = Cli::try_parse_from(["packlist-rename", "--scale", "0"]).unwrap();
        assert!(build_config(&cli).is_err());
    }
}
