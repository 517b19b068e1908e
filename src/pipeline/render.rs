//! PDF rasterisation: render the first page of a document for OCR.
//!
//! Only page 0 is rendered; packing lists carry the order number in their
//! header. The page is scaled by [`RenameConfig::render_scale`] and converted
//! to 8-bit RGB, the format tesseract reads best.
//!
//! The `PdfDocument` lives only inside [`PdfiumRasterizer::first_page`], so
//! pdfium closes it on every return path before any OCR work starts.
//!
//! [`RenameConfig::render_scale`]: crate::config::RenameConfig::render_scale

use crate::error::{FileError, RenameError};
use image::RgbImage;
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Turns a document into the raster of its first page.
pub trait PageRasterizer {
    /// Render page 0 of `path`.
    ///
    /// Returns `Ok(None)` for a document without pages.
    fn first_page(&self, path: &Path) -> Result<Option<RgbImage>, FileError>;
}

/// [`PageRasterizer`] backed by a bound pdfium library.
pub struct PdfiumRasterizer {
    pdfium: Pdfium,
    scale: f32,
}

impl PdfiumRasterizer {
    /// Bind pdfium from `lib_path`, or from the system library when `None`.
    pub fn bind(lib_path: Option<&Path>, scale: f32) -> Result<Self, RenameError> {
        let bindings = match lib_path {
            Some(path) => Pdfium::bind_to_library(path),
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| RenameError::PdfiumBindingFailed(format!("{e:?}")))?;

        debug!(
            "pdfium bound from {}",
            lib_path.map_or_else(|| "system library".into(), |p| p.display().to_string())
        );
        Ok(Self::new(Pdfium::new(bindings), scale))
    }

    /// Wrap an already bound pdfium instance.
    pub fn new(pdfium: Pdfium, scale: f32) -> Self {
        Self { pdfium, scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl PageRasterizer for PdfiumRasterizer {
    fn first_page(&self, path: &Path) -> Result<Option<RgbImage>, FileError> {
        let document =
            self.pdfium
                .load_pdf_from_file(path, None)
                .map_err(|e| FileError::DocumentOpen {
                    path: path.to_path_buf(),
                    detail: format!("{e:?}"),
                })?;

        let pages = document.pages();
        if pages.len() == 0 {
            info!("{} has no pages", path.display());
            return Ok(None);
        }

        let render_error = |e: PdfiumError| FileError::Rasterisation {
            path: path.to_path_buf(),
            detail: format!("{e:?}"),
        };

        let page = pages.get(0).map_err(render_error)?;
        let render_config = PdfRenderConfig::new().scale_page_by_factor(self.scale);
        let bitmap = page.render_with_config(&render_config).map_err(render_error)?;
        let image = bitmap.as_image().to_rgb8();

        debug!(
            "Rendered {} page 1 → {}x{} px",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Some(image))
    }
}
