//! Configuration for a rename run.
//!
//! Everything that may differ between machines (input folder, log file,
//! engine locations) lives in [`RenameConfig`], built via its
//! [`RenameConfigBuilder`]. The naming scheme itself (marker, order number
//! width, output prefix, extension) is fixed and exposed as constants.

use crate::error::RenameError;
use std::path::{Path, PathBuf};

/// Literal that precedes the order number in the recognised text.
pub const ORDER_MARKER: &str = "Order# ";

/// Number of characters taken after [`ORDER_MARKER`].
pub const ORDER_NUMBER_LEN: usize = 8;

/// Prefix of every renamed file. Files already carrying it are not rescanned.
pub const OUTPUT_PREFIX: &str = "Packlist_";

/// Extension of the documents we process (matched case-insensitively).
pub const PDF_EXTENSION: &str = ".pdf";

/// Default input folder when neither flag nor environment sets one.
pub const DEFAULT_FOLDER: &str = "test_pdfs";

/// Default page scale factor; 1.0 renders at 72 DPI.
pub const DEFAULT_RENDER_SCALE: f32 = 2.0;

/// Per-day log file in the system temporary directory,
/// e.g. `/tmp/ocr_log_2026-10-15.log`.
pub fn default_log_path() -> PathBuf {
    let today = chrono::Local::now().format("%Y-%m-%d");
    std::env::temp_dir().join(format!("ocr_log_{today}.log"))
}

/// Configuration for a rename run.
///
/// Built via [`RenameConfig::builder()`] or [`RenameConfig::default()`].
///
/// # Example
/// ```rust
/// use packlist_rename::RenameConfig;
///
/// let config = RenameConfig::builder()
///     .folder("/srv/scans")
///     .tesseract_cmd("/usr/local/bin/tesseract")
///     .build()
///     .unwrap();
/// assert_eq!(config.render_scale, 2.0);
/// ```
#[derive(Debug, Clone)]
pub struct RenameConfig {
    /// Folder whose PDFs are renamed. Not searched recursively.
    pub folder: PathBuf,

    /// Append-only run log. Default: [`default_log_path()`].
    pub log_file: PathBuf,

    /// Tesseract executable. A bare name is resolved through `PATH`.
    pub tesseract_cmd: PathBuf,

    /// Tesseract language pack(s), e.g. `eng` or `eng+deu`. Default: `eng`.
    pub tesseract_lang: String,

    /// Explicit libpdfium location. `None` binds the system library.
    pub pdfium_lib_path: Option<PathBuf>,

    /// Linear scale applied to the first page before OCR. Default: 2.0.
    pub render_scale: f32,

    /// Also write a log line for every successful rename. Default: false.
    pub log_renames: bool,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            folder: PathBuf::from(DEFAULT_FOLDER),
            log_file: default_log_path(),
            tesseract_cmd: PathBuf::from("tesseract"),
            tesseract_lang: "eng".to_string(),
            pdfium_lib_path: None,
            render_scale: DEFAULT_RENDER_SCALE,
            log_renames: false,
        }
    }
}

impl RenameConfig {
    /// Create a new builder for `RenameConfig`.
    pub fn builder() -> RenameConfigBuilder {
        RenameConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`RenameConfig`].
#[derive(Debug)]
pub struct RenameConfigBuilder {
    config: RenameConfig,
}

impl RenameConfigBuilder {
    pub fn folder(mut self, folder: impl AsRef<Path>) -> Self {
        self.config.folder = folder.as_ref().to_path_buf();
        self
    }

    pub fn log_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config.log_file = path.as_ref().to_path_buf();
        self
    }

    pub fn tesseract_cmd(mut self, cmd: impl AsRef<Path>) -> Self {
        self.config.tesseract_cmd = cmd.as_ref().to_path_buf();
        self
    }

    pub fn tesseract_lang(mut self, lang: impl Into<String>) -> Self {
        self.config.tesseract_lang = lang.into();
        self
    }

    pub fn pdfium_lib_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.pdfium_lib_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn render_scale(mut self, scale: f32) -> Self {
        self.config.render_scale = scale;
        self
    }

    pub fn log_renames(mut self, v: bool) -> Self {
        self.config.log_renames = v;
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<RenameConfig, RenameError> {
        let c = &self.config;
        if !c.render_scale.is_finite() || !(0.25..=8.0).contains(&c.render_scale) {
            return Err(RenameError::InvalidConfig(format!(
                "render scale must be 0.25–8.0, got {}",
                c.render_scale
            )));
        }
        if c.folder.as_os_str().is_empty() {
            return Err(RenameError::InvalidConfig("input folder is empty".into()));
        }
        if c.log_file.as_os_str().is_empty() {
            return Err(RenameError::InvalidConfig("log file path is empty".into()));
        }
        if c.tesseract_lang.trim().is_empty() {
            return Err(RenameError::InvalidConfig(
                "tesseract language is empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = RenameConfig::default();
        assert_eq!(c.folder, PathBuf::from(DEFAULT_FOLDER));
        assert_eq!(c.tesseract_cmd, PathBuf::from("tesseract"));
        assert_eq!(c.tesseract_lang, "eng");
        assert_eq!(c.render_scale, 2.0);
        assert!(c.pdfium_lib_path.is_none());
        assert!(!c.log_renames);
    }

    #[test]
    fn default_log_path_is_per_day_in_temp_dir() {
        let p = default_log_path();
        assert!(p.starts_with(std::env::temp_dir()));
        let name = p.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("ocr_log_"), "got: {name}");
        assert!(name.ends_with(".log"), "got: {name}");
        // ocr_log_YYYY-MM-DD.log
        assert_eq!(name.len(), "ocr_log_".len() + 10 + ".log".len());
    }

    #[test]
    fn builder_sets_fields() {
        let c = RenameConfig::builder()
            .folder("/scans")
            .log_file("/var/log/rename.log")
            .tesseract_lang("eng+deu")
            .pdfium_lib_path("/opt/pdfium/libpdfium.so")
            .render_scale(3.0)
            .log_renames(true)
            .build()
            .unwrap();
        assert_eq!(c.folder, PathBuf::from("/scans"));
        assert_eq!(c.log_file, PathBuf::from("/var/log/rename.log"));
        assert_eq!(c.tesseract_lang, "eng+deu");
        assert_eq!(
            c.pdfium_lib_path.as_deref(),
            Some(Path::new("/opt/pdfium/libpdfium.so"))
        );
        assert_eq!(c.render_scale, 3.0);
        assert!(c.log_renames);
    }

    #[test]
    fn builder_rejects_bad_scale() {
        for scale in [0.0, -1.0, 9.0, f32::NAN] {
            let err = RenameConfig::builder().render_scale(scale).build();
            assert!(
                matches!(err, Err(RenameError::InvalidConfig(_))),
                "scale {scale} accepted"
            );
        }
    }

    #[test]
    fn builder_rejects_empty_folder() {
        let err = RenameConfig::builder().folder("").build();
        assert!(matches!(err, Err(RenameError::InvalidConfig(_))));
    }
}
