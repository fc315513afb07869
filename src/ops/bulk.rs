//! Bulk move: relocate every direct-child file of one directory
//!
//! Non-recursive by contract: subdirectories of the source are neither
//! moved nor reported. Name collisions in the destination are skipped, not
//! overwritten, and surfaced as a count in the final message.

use crate::StepResult;
use crate::ops::fsops;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

/// Move all files from `source` into `destination`
///
/// Both paths must already be resolved. Preconditions (existing directory
/// on each side) are reported as failures naming the offending side. An
/// empty source yields a distinct "no files found" result rather than a
/// move of zero.
#[must_use]
pub fn move_all(source: &Path, destination: &Path) -> StepResult {
    if !source.exists() {
        return StepResult::fail(format!(
            "Source directory does not exist: {}",
            source.display()
        ));
    }
    if !source.is_dir() {
        return StepResult::fail(format!("Source is not a directory: {}", source.display()));
    }
    if !destination.exists() {
        return StepResult::fail(format!(
            "Destination directory does not exist: {}",
            destination.display()
        ));
    }
    if !destination.is_dir() {
        return StepResult::fail(format!(
            "Destination is not a directory: {}",
            destination.display()
        ));
    }

    let files = match direct_child_files(source) {
        Ok(files) => files,
        Err(e) => {
            return StepResult::fail(format!("Error reading {}: {e}", source.display()));
        }
    };

    if files.is_empty() {
        return StepResult::fail(format!(
            "No files found in the source directory: {}",
            source.display()
        ));
    }

    let progress = progress_bar(files.len() as u64);
    let mut moved = 0usize;
    let mut skipped = 0usize;

    for file in &files {
        progress.inc(1);

        let Some(name) = file.file_name() else {
            continue;
        };
        let target = destination.join(name);

        if target.exists() {
            skipped += 1;
            continue;
        }

        if let Err(e) = fsops::transfer(file, &target) {
            progress.finish_and_clear();
            return StepResult::fail(format!("Error moving {}: {e}", file.display()));
        }
        moved += 1;
    }

    progress.finish_and_clear();

    let mut message = format!(
        "Moved {moved} files from {} to {}",
        source.display(),
        destination.display()
    );
    if skipped > 0 {
        message.push_str(&format!(
            "\nSkipped {skipped} files that already exist in the destination."
        ));
    }

    StepResult::ok(message)
}

/// Regular files directly under `dir`, in directory order
fn direct_child_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    Ok(files)
}

/// Progress bar for the move; hidden automatically off-terminal
fn progress_bar(len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::with_template("Moving files {bar:30} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::write_file;
    use tempfile::tempdir;

    #[test]
    fn test_move_all_with_collision() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source");
        let dest = dir.path().join("dest");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&dest).unwrap();

        write_file(&source.join("a.txt"), "a-source");
        write_file(&source.join("b.txt"), "b-source");
        write_file(&dest.join("b.txt"), "b-dest");

        let result = move_all(&source, &dest);

        assert!(result.succeeded);
        assert!(result.message.contains("Moved 1 files"));
        assert!(result.message.contains("Skipped 1 files"));

        // a.txt moved, b.txt untouched on both sides
        assert!(dest.join("a.txt").exists());
        assert!(!source.join("a.txt").exists());
        assert_eq!(
            fs::read_to_string(source.join("b.txt")).unwrap(),
            "b-source"
        );
        assert_eq!(fs::read_to_string(dest.join("b.txt")).unwrap(), "b-dest");
    }

    #[test]
    fn test_move_all_skip_count_omitted_when_zero() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source");
        let dest = dir.path().join("dest");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&dest).unwrap();
        write_file(&source.join("only.txt"), "data");

        let result = move_all(&source, &dest);

        assert!(result.succeeded);
        assert!(result.message.contains("Moved 1 files"));
        assert!(!result.message.contains("Skipped"));
    }

    #[test]
    fn test_move_all_empty_source_is_distinct() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source");
        let dest = dir.path().join("dest");
        fs::create_dir(&source).unwrap();
        fs::create_dir(&dest).unwrap();

        let result = move_all(&source, &dest);

        assert!(!result.succeeded);
        assert!(result.message.contains("No files found"));
    }

    #[test]
    fn test_move_all_ignores_subdirectories() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source");
        let dest = dir.path().join("dest");
        fs::create_dir_all(source.join("nested")).unwrap();
        fs::create_dir(&dest).unwrap();

        write_file(&source.join("top.txt"), "top");
        write_file(&source.join("nested/deep.txt"), "deep");

        let result = move_all(&source, &dest);

        assert!(result.succeeded);
        assert!(result.message.contains("Moved 1 files"));
        // Subdirectory and its contents stay put
        assert!(source.join("nested/deep.txt").exists());
        assert!(!dest.join("nested").exists());
    }

    #[test]
    fn test_move_all_missing_source_names_side() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("dest");
        fs::create_dir(&dest).unwrap();

        let result = move_all(&dir.path().join("missing"), &dest);

        assert!(!result.succeeded);
        assert!(result.message.contains("Source directory does not exist"));
    }

    #[test]
    fn test_move_all_source_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        write_file(&file, "data");
        let dest = dir.path().join("dest");
        fs::create_dir(&dest).unwrap();

        let result = move_all(&file, &dest);

        assert!(!result.succeeded);
        assert!(result.message.contains("Source is not a directory"));
    }

    #[test]
    fn test_move_all_missing_destination_names_side() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("source");
        fs::create_dir(&source).unwrap();
        write_file(&source.join("a.txt"), "a");

        let result = move_all(&source, &dir.path().join("missing"));

        assert!(!result.succeeded);
        assert!(result.message.contains("Destination directory does not exist"));
    }
}
