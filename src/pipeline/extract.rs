//! Order-number extraction from recognised text.
//!
//! The order number is a fixed-width slice: the [`ORDER_NUMBER_LEN`]
//! characters right after the first [`ORDER_MARKER`], with only surrounding
//! whitespace trimmed. No character-class check is made; whatever tesseract
//! produced in those positions becomes part of the file name.

use crate::config::{ORDER_MARKER, ORDER_NUMBER_LEN};
use crate::error::ExtractError;

/// Byte offset of the first marker in `text`.
pub fn find_marker(text: &str) -> Option<usize> {
    text.find(ORDER_MARKER)
}

/// Slice the order number out of `text`.
pub fn order_number(text: &str) -> Result<&str, ExtractError> {
    let marker = find_marker(text).ok_or(ExtractError::MarkerNotFound)?;
    let rest = &text[marker + ORDER_MARKER.len()..];

    let available = rest.chars().count();
    if available < ORDER_NUMBER_LEN {
        return Err(ExtractError::InsufficientLength { available });
    }

    let end = rest
        .char_indices()
        .nth(ORDER_NUMBER_LEN)
        .map_or(rest.len(), |(i, _)| i);
    Ok(rest[..end].trim())
}
