//! Single-item filesystem handlers: create, rename, move
//!
//! Every handler is a total function: filesystem failures are caught here
//! and folded into the returned [`StepResult`] instead of propagating. The
//! caller has already resolved location tokens to absolute paths.

use crate::StepResult;
use std::fs;
use std::path::Path;

/// Create a directory (including missing parents) under a base location
///
/// An existing target is reported as "already exists" with
/// `succeeded = false`; its contents are left untouched.
#[must_use]
pub fn create_folder(base: &Path, folder_name: &str) -> StepResult {
    let folder_name = folder_name.trim();
    if folder_name.is_empty() {
        return StepResult::fail("No folder name specified.");
    }

    let folder_path = base.join(folder_name);

    if folder_path.exists() {
        return StepResult::fail(format!("Folder already exists: {}", folder_path.display()));
    }

    match fs::create_dir_all(&folder_path) {
        Ok(()) => StepResult::ok(format!("Created folder: {}", folder_path.display())),
        Err(e) => StepResult::fail(format!(
            "Error creating folder {}: {e}",
            folder_path.display()
        )),
    }
}

/// Create a file under a base location, optionally seeded with content
///
/// Creating a file that already exists is an idempotent no-op, reported as
/// "already exists" so the caller can tell it apart from a fresh create.
#[must_use]
pub fn create_file(base: &Path, file_name: &str, content: &str) -> StepResult {
    let file_name = file_name.trim();
    if file_name.is_empty() {
        return StepResult::fail("No file name specified.");
    }

    let file_path = base.join(file_name);

    if file_path.exists() {
        return StepResult::fail(format!("File already exists: {}", file_path.display()));
    }

    match fs::write(&file_path, content) {
        Ok(()) => StepResult::ok(format!("Created file: {}", file_path.display())),
        Err(e) => StepResult::fail(format!("Error creating file {}: {e}", file_path.display())),
    }
}

/// Rename a file or folder within one base location
///
/// Fails when the source is missing or the destination name is already
/// taken; an existing destination is never overwritten.
#[must_use]
pub fn rename_item(base: &Path, old_name: &str, new_name: &str) -> StepResult {
    let old_path = base.join(old_name.trim());
    let new_path = base.join(new_name.trim());

    if !old_path.exists() {
        return StepResult::fail(format!("Source does not exist: {}", old_path.display()));
    }

    if new_path.exists() {
        return StepResult::fail(format!(
            "Destination already exists: {}",
            new_path.display()
        ));
    }

    match fs::rename(&old_path, &new_path) {
        Ok(()) => StepResult::ok(format!(
            "Renamed from {} to {}",
            old_path.display(),
            new_path.display()
        )),
        Err(e) => StepResult::fail(format!(
            "Error renaming {} to {}: {e}",
            old_path.display(),
            new_path.display()
        )),
    }
}

/// Move a file or folder to a new location
///
/// When the destination resolves to an existing directory the item is moved
/// into it, keeping its base name. The effective destination is never
/// overwritten.
#[must_use]
pub fn move_item(source: &Path, destination: &Path) -> StepResult {
    if !source.exists() {
        return StepResult::fail(format!("Source does not exist: {}", source.display()));
    }

    let effective = if destination.is_dir() {
        match source.file_name() {
            Some(name) => destination.join(name),
            None => {
                return StepResult::fail(format!(
                    "Cannot determine file name for: {}",
                    source.display()
                ));
            }
        }
    } else {
        destination.to_path_buf()
    };

    if effective.exists() {
        return StepResult::fail(format!(
            "Destination already exists: {}",
            effective.display()
        ));
    }

    match transfer(source, &effective) {
        Ok(()) => StepResult::ok(format!(
            "Moved from {} to {}",
            source.display(),
            effective.display()
        )),
        Err(e) => StepResult::fail(format!(
            "Error moving {} to {}: {e}",
            source.display(),
            effective.display()
        )),
    }
}

/// Move a path, falling back to copy-then-remove for files when a plain
/// rename is refused (cross-device moves)
pub(crate) fn transfer(source: &Path, destination: &Path) -> std::io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(rename_err) => {
            if source.is_file() {
                fs::copy(source, destination)?;
                fs::remove_file(source)?;
                Ok(())
            } else {
                Err(rename_err)
            }
        }
    }
}
