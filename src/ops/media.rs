//! Best-match selection over the media tree
//!
//! Walks the whole tree under the media root, filters candidates to known
//! video extensions, and scores each against the query. Scoring is
//! additive and the whole-query and per-word checks are independent: a
//! query fully contained in a filename also earns the per-word bonus for
//! each of its words, and duplicate words in the query each count again.
//! This mirrors the scoring the tool has always shipped with; changing it
//! would change which file gets opened.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions considered playable video
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "3gp", "3g2", "m2ts",
];

/// A scored candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMatch {
    pub path: PathBuf,
    pub score: u32,
}

/// Select the single best-matching file under `root`
///
/// Candidates scoring zero are discarded. The highest score wins; on a tie
/// the first candidate encountered is kept. The walk sorts entries by file
/// name so traversal order, and therefore tie-breaking, does not depend on
/// the filesystem's incidental directory order.
#[must_use]
pub fn find_best(query: &str, root: &Path, extensions: &[&str]) -> Option<FileMatch> {
    let query_lower = query.to_lowercase();
    let words: Vec<&str> = query_lower.split_whitespace().collect();

    let mut best: Option<FileMatch> = None;

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !has_video_extension(&name, extensions) {
            continue;
        }

        let score = score(&query_lower, &words, &name.to_lowercase());
        if score == 0 {
            continue;
        }

        let better = best.as_ref().is_none_or(|current| score > current.score);
        if better {
            best = Some(FileMatch {
                path: entry.into_path(),
                score,
            });
        }
    }

    best
}

/// Case-insensitive suffix check against the known extension set
fn has_video_extension(name: &str, extensions: &[&str]) -> bool {
    let lower = name.to_lowercase();
    extensions
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// Additive match score: +50 for the whole query, +10 per query word
fn score(query_lower: &str, words: &[&str], name_lower: &str) -> u32 {
    let mut score = 0;
    if name_lower.contains(query_lower) {
        score += 50;
    }
    for word in words {
        if name_lower.contains(word) {
            score += 10;
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_file;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_best_match_beats_non_match() {
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("Inception.2010.mkv"), "");
        write_file(&dir.path().join("Other.mp4"), "");

        let best = find_best("inception", dir.path(), VIDEO_EXTENSIONS).unwrap();

        assert!(best.path.ends_with("Inception.2010.mkv"));
        // Whole query (+50) plus its single word (+10)
        assert_eq!(best.score, 60);
    }

    #[test]
    fn test_scoring_is_additive_per_word() {
        // Whole query not contained (words reordered in the filename), but
        // both words present individually
        assert_eq!(
            score("dark knight", &["dark", "knight"], "knight.of.the.dark.2008.mkv"),
            20
        );
        // Whole query contained as well
        assert_eq!(
            score("dark knight", &["dark", "knight"], "the dark knight.mkv"),
            70
        );
    }

    #[test]
    fn test_duplicate_query_words_score_again() {
        // "la la" contains the word "la" twice; each occurrence adds +10
        assert_eq!(score("la la", &["la", "la"], "la la land.mp4"), 70);
    }

    #[test]
    fn test_non_video_files_are_not_candidates() {
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("Inception.srt"), "");
        write_file(&dir.path().join("Inception.txt"), "");

        assert!(find_best("inception", dir.path(), VIDEO_EXTENSIONS).is_none());
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("Inception.MKV"), "");

        assert!(find_best("inception", dir.path(), VIDEO_EXTENSIONS).is_some());
    }

    #[test]
    fn test_search_is_recursive() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scifi/2010s")).unwrap();
        write_file(&dir.path().join("scifi/2010s/Interstellar.mkv"), "");

        let best = find_best("interstellar", dir.path(), VIDEO_EXTENSIONS).unwrap();
        assert!(best.path.ends_with("Interstellar.mkv"));
    }

    #[test]
    fn test_tie_keeps_first_in_sorted_order() {
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("alien_b.mkv"), "");
        write_file(&dir.path().join("alien_a.mkv"), "");

        let best = find_best("alien", dir.path(), VIDEO_EXTENSIONS).unwrap();

        // Both score identically; sorted traversal visits alien_a first
        assert!(best.path.ends_with("alien_a.mkv"));
    }

    #[test]
    fn test_no_match_returns_none() {
        let dir = tempdir().unwrap();
        write_file(&dir.path().join("Other.mp4"), "");

        assert!(find_best("inception", dir.path(), VIDEO_EXTENSIONS).is_none());
    }
}
