//! Folder scanning: list the PDFs that still need an order number.
//!
//! Only the top level of the folder is visited. A file qualifies when its
//! name ends in `.pdf` (any case) and does not already start with
//! [`OUTPUT_PREFIX`], which is what makes a second run over the same folder
//! a no-op.

use crate::config::{OUTPUT_PREFIX, PDF_EXTENSION};
use crate::error::ScanError;
use std::fs::ReadDir;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lazy iterator over candidate files, in `read_dir` order.
#[derive(Debug)]
pub struct Candidates {
    entries: ReadDir,
}

impl Iterator for Candidates {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        for entry in self.entries.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable directory entry: {e}");
                    continue;
                }
            };
            let path = entry.path();
            let name = entry.file_name();
            if is_candidate_name(&name.to_string_lossy()) && path.is_file() {
                return Some(path);
            }
        }
        None
    }
}

/// Start scanning `folder`.
pub fn candidates(folder: &Path) -> Result<Candidates, ScanError> {
    if !folder.is_dir() {
        return Err(ScanError::FolderNotFound {
            path: folder.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(folder).map_err(|source| ScanError::Unreadable {
        path: folder.to_path_buf(),
        source,
    })?;
    debug!("Scanning {}", folder.display());
    Ok(Candidates { entries })
}

/// Whether a bare file name should be processed.
pub fn is_candidate_name(name: &str) -> bool {
    name.to_lowercase().ends_with(PDF_EXTENSION) && !name.starts_with(OUTPUT_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn candidate_names() {
        assert!(is_candidate_name("scan001.pdf"));
        assert!(is_candidate_name("SCAN001.PDF"));
        assert!(is_candidate_name("mixed.Pdf"));
        assert!(is_candidate_name("packlist_lower.pdf"));

        assert!(!is_candidate_name("Packlist_AB123456.pdf"));
        assert!(!is_candidate_name("Packlist_AB123456(1).PDF"));
        assert!(!is_candidate_name("notes.txt"));
        assert!(!is_candidate_name("archive.pdf.zip"));
        assert!(!is_candidate_name("pdf"));
    }

    #[test]
    fn scans_only_matching_files() {
        let dir = tempfile::TempDir::new().unwrap();
        for name in ["a.pdf", "B.PDF", "Packlist_X.pdf", "c.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("folder.pdf")).unwrap();

        let mut found: Vec<String> = candidates(dir.path())
            .unwrap()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        found.sort();
        assert_eq!(found, vec!["B.PDF", "a.pdf"]);
    }

    #[test]
    fn missing_folder() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        match candidates(&missing) {
            Err(ScanError::FolderNotFound { path }) => assert_eq!(path, missing),
            other => panic!("expected FolderNotFound, got {other:?}"),
        }
    }

    #[test]
    fn file_instead_of_folder() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("a.pdf");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(
            candidates(&file),
            Err(ScanError::FolderNotFound { .. })
        ));
    }
}
