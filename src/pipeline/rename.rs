//! Collision-free renaming next to the source file.
//!
//! The destination is `Packlist_<order>.pdf` in the source's directory. If
//! that name is taken, `Packlist_<order>(1).pdf`, `(2)`, … are probed in
//! order and the first free one wins. Existing files are never overwritten
//! by this probe, but a concurrent process could still claim the chosen name
//! between the probe and the move.

use crate::config::{OUTPUT_PREFIX, PDF_EXTENSION};
use crate::outcome::FileOutcome;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name for `order`, with the collision counter `n` if any.
pub fn destination_name(order: &str, n: Option<u32>) -> String {
    match n {
        None => format!("{OUTPUT_PREFIX}{order}{PDF_EXTENSION}"),
        Some(n) => format!("{OUTPUT_PREFIX}{order}({n}){PDF_EXTENSION}"),
    }
}

/// First unused destination for `order` inside `dir`.
///
/// A dangling symlink counts as taken.
pub fn next_free_path(dir: &Path, order: &str) -> PathBuf {
    let taken = |p: &Path| std::fs::symlink_metadata(p).is_ok();

    let base = dir.join(destination_name(order, None));
    if !taken(&base) {
        return base;
    }
    (1u32..)
        .map(|n| dir.join(destination_name(order, Some(n))))
        .find(|p| !taken(p))
        .unwrap_or(base)
}

/// Move `source` to the first free destination for `order`.
///
/// A failed move leaves `source` in place and is reported as
/// [`FileOutcome::RenameFailed`].
pub fn rename_to_order(source: &Path, order: &str) -> FileOutcome {
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    let dest = next_free_path(dir, order);

    match std::fs::rename(source, &dest) {
        Ok(()) => {
            debug!("Renamed {} → {}", source.display(), dest.display());
            FileOutcome::Renamed {
                from: source.to_path_buf(),
                to: dest,
            }
        }
        Err(e) => FileOutcome::RenameFailed {
            from: source.to_path_buf(),
            to: dest,
            reason: e.to_string(),
        },
    }
}
