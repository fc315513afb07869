//! Testing utilities for fcmdr
//!
//! Small helpers shared by the unit tests. Only available when compiled
//! with `cfg(test)`.

use std::fs;
use std::path::Path;

/// Create a file with the given content, creating parent directories
///
/// # Panics
///
/// Panics if the file or its parents cannot be created; tests want loud
/// failures here.
pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, content).expect("Failed to write test file");
}
