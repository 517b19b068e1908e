//! Append-only run log.
//!
//! The run log is the only record of what happened to each file: the binary
//! itself prints nothing. A [`LogSink`] is opened once per run and handed by
//! reference to every stage, so there is no process-wide logging state.
//!
//! Writing never fails outward. When the file cannot be opened or written,
//! the line is reported through `tracing::warn!` instead and the run goes on.

use crate::error::LogSinkUnavailable;
use std::fmt::Display;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Timestamp format of each line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Handle to the run log: one `"<timestamp> - <message>"` line per record.
#[derive(Debug)]
pub struct LogSink {
    path: PathBuf,
    file: Option<File>,
}

impl LogSink {
    /// Open `path` for appending, creating it if absent.
    pub fn try_open(path: impl AsRef<Path>) -> Result<Self, LogSinkUnavailable> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LogSinkUnavailable {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            file: Some(file),
        })
    }

    /// Like [`LogSink::try_open`], but an unavailable file degrades to a sink
    /// that only reports through `tracing`.
    pub fn open(path: impl AsRef<Path>) -> Self {
        match Self::try_open(&path) {
            Ok(sink) => sink,
            Err(e) => {
                warn!("{e}; run log falls back to stderr");
                Self {
                    path: e.path,
                    file: None,
                }
            }
        }
    }

    /// Path this sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether lines actually reach the log file.
    pub fn is_available(&self) -> bool {
        self.file.is_some()
    }

    /// Append one line. Never fails.
    pub fn record(&self, message: impl Display) {
        let line = format_line(&chrono::Local::now(), &message);
        info!(target: "packlist_rename::run_log", "{message}");

        let Some(mut file) = self.file.as_ref() else {
            warn!("run log unavailable: {line}");
            return;
        };
        if let Err(e) = writeln!(file, "{line}") {
            warn!(
                "cannot write run log {}: {e}; dropped: {line}",
                self.path.display()
            );
        }
    }
}

/// Render a single log line. Embedded line breaks are flattened so every
/// record stays on one line.
pub fn format_line<Tz>(at: &chrono::DateTime<Tz>, message: &impl Display) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: Display,
{
    let message = message.to_string().replace(['\r', '\n'], " ");
    format!("{} - {message}", at.format(TIMESTAMP_FORMAT))
}
