//! Bounded filename search
//!
//! Walks the tree under a base path and collects files whose name contains
//! the search term, stopping as soon as the cap is reached. The cap is an
//! early exit, not a truncation: files the walk never reaches are never
//! examined.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Hard cap on the number of matches a search returns
pub const MAX_RESULTS: usize = 10;

/// Find up to [`MAX_RESULTS`] files under `base` whose name contains `term`
///
/// Matching is a case-insensitive substring test against the file name
/// only, never the full path. Unreadable entries are skipped silently.
#[must_use]
pub fn find_matching(term: &str, base: &Path) -> Vec<PathBuf> {
    let term_lower = term.to_lowercase();

    WalkDir::new(base)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .to_lowercase()
                .contains(&term_lower)
        })
        .map(walkdir::DirEntry::into_path)
        .take(MAX_RESULTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_file;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_find_matching_is_case_insensitive() {
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("Budget-2026.xlsx"), "");
        write_file(&dir.path().join("notes.txt"), "");

        let matches = find_matching("budget", dir.path());

        assert_eq!(matches.len(), 1);
        assert!(matches[0].ends_with("Budget-2026.xlsx"));
    }

    #[test]
    fn test_find_matching_searches_recursively() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        write_file(&dir.path().join("a/b/report.pdf"), "");

        let matches = find_matching("report", dir.path());

        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_find_matching_stops_at_cap() {
        let dir = tempdir().unwrap();
        for i in 0..25 {
            write_file(&dir.path().join(format!("match_{i:02}.txt")), "");
        }

        let matches = find_matching("match", dir.path());

        assert_eq!(matches.len(), MAX_RESULTS);
    }

    #[test]
    fn test_find_matching_matches_name_not_path() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("needle")).unwrap();
        write_file(&dir.path().join("needle/haystack.txt"), "");

        // "needle" appears only in the directory component
        let matches = find_matching("needle", dir.path());

        assert!(matches.is_empty());
    }

    #[test]
    fn test_find_matching_none_found() {
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("a.txt"), "");

        assert!(find_matching("zzz", dir.path()).is_empty());
    }
}
