//! OCR: turn a rendered page into one line of text.
//!
//! The engine is opaque. Empty or garbled output is not an error here; it
//! simply fails extraction downstream. Line breaks are flattened so a marker
//! and its order number split across two recognised lines still match.

use crate::error::FileError;
use image::RgbImage;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Recognises the text in a raster image.
pub trait OcrEngine {
    /// Raw recognised text. `source` is the document the image came from.
    fn recognize(&self, image: &RgbImage, source: &Path) -> Result<String, FileError>;
}

/// Recognise `image` and flatten the result to a single line.
pub fn page_text(
    engine: &dyn OcrEngine,
    image: &RgbImage,
    source: &Path,
) -> Result<String, FileError> {
    let raw = engine.recognize(image, source)?;
    Ok(normalize_newlines(&raw))
}

/// Replace every line break (`\r\n`, `\n` or `\r`) with a single space.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

/// [`OcrEngine`] wrapping the `tesseract` CLI.
#[derive(Debug, Clone)]
pub struct TesseractEngine {
    cmd: PathBuf,
    lang: String,
}

impl TesseractEngine {
    pub fn new(cmd: impl AsRef<Path>, lang: impl Into<String>) -> Self {
        Self {
            cmd: cmd.as_ref().to_path_buf(),
            lang: lang.into(),
        }
    }

    pub fn cmd(&self) -> &Path {
        &self.cmd
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &RgbImage, source: &Path) -> Result<String, FileError> {
        let ocr_error = |detail: String| FileError::Ocr {
            path: source.to_path_buf(),
            detail,
        };

        // tesseract reads from a file; the temp file is removed on drop.
        let input = tempfile::Builder::new()
            .prefix("packlist-ocr")
            .suffix(".png")
            .tempfile()
            .map_err(|e| ocr_error(format!("cannot create temp image: {e}")))?;
        image
            .save_with_format(input.path(), image::ImageFormat::Png)
            .map_err(|e| ocr_error(format!("cannot write temp image: {e}")))?;

        let output = Command::new(&self.cmd)
            .arg(input.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.lang)
            .output()
            .map_err(|e| ocr_error(format!("cannot run {}: {e}", self.cmd.display())))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ocr_error(format!(
                "{} exited with {}: {}",
                self.cmd.display(),
                output.status,
                stderr.trim()
            )));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(
            "tesseract recognised {} chars in {}",
            text.chars().count(),
            source.display()
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(&'static str);

    impl OcrEngine for Canned {
        fn recognize(&self, _image: &RgbImage, _source: &Path) -> Result<String, FileError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn newlines_become_single_spaces() {
        assert_eq!(normalize_newlines("a\nb"), "a b");
        assert_eq!(normalize_newlines("a\r\nb"), "a b");
        assert_eq!(normalize_newlines("a\rb"), "a b");
        assert_eq!(normalize_newlines("a\n\nb"), "a  b");
        assert_eq!(normalize_newlines("no breaks"), "no breaks");
    }

    #[test]
    fn page_text_flattens_engine_output() {
        let img = RgbImage::new(1, 1);
        let text = page_text(&Canned("Order#\nAB123456\n"), &img, Path::new("a.pdf")).unwrap();
        assert_eq!(text, "Order# AB123456 ");
    }

    #[test]
    fn missing_binary_is_ocr_error() {
        let engine = TesseractEngine::new("/definitely/not/tesseract", "eng");
        let img = RgbImage::new(4, 4);
        match engine.recognize(&img, Path::new("/in/a.pdf")) {
            Err(FileError::Ocr { path, detail }) => {
                assert_eq!(path, PathBuf::from("/in/a.pdf"));
                assert!(detail.contains("cannot run"), "got: {detail}");
            }
            other => panic!("expected Ocr error, got {other:?}"),
        }
    }

    #[test]
    fn accessors() {
        let engine = TesseractEngine::new("tesseract", "eng+deu");
        assert_eq!(engine.cmd(), Path::new("tesseract"));
        assert_eq!(engine.lang(), "eng+deu");
    }
}
