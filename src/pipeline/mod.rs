//! Pipeline stages for renaming one folder of packing lists.
//!
//! Each submodule implements exactly one step and reports expected failures
//! as values; logging happens once, in [`crate::process`].
//!
//! ## Data Flow
//!
//! ```text
//! scan ──▶ render ──▶ ocr ──▶ extract ──▶ rename
//! (folder)  (pdfium)  (tesseract) (slice)  (probe + move)
//! ```
//!
//! 1. [`scan`]   : lazily list `*.pdf` files without the output prefix
//! 2. [`render`] : rasterise page 0 at 2x scale
//! 3. [`ocr`]    : recognise text and flatten line breaks
//! 4. [`extract`]: take the fixed-width order number after the marker
//! 5. [`rename`] : pick the first free `Packlist_…` name and move the file

pub mod extract;
pub mod ocr;
pub mod rename;
pub mod render;
pub mod scan;
