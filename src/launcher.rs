//! Platform launcher boundary
//!
//! Opening a file manager window or handing a file to the default
//! application is fire-and-forget: the core only records that the call was
//! issued, never whether the spawned program succeeded. The trait exists so
//! operation handlers can be exercised in tests without touching the
//! desktop environment.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Fire-and-forget access to the platform's open-with machinery
pub trait Launcher {
    /// Open a file-manager view at the given path
    fn open_in_file_manager(&self, path: &Path);

    /// Open a file with the platform's default application
    fn open_with_default_app(&self, path: &Path);
}

/// Launcher backed by the `open` crate
///
/// Detached so a long-lived viewer (media player, file manager) never
/// blocks the CLI from finishing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open_in_file_manager(&self, path: &Path) {
        if let Err(e) = open::that_detached(path) {
            eprintln!("Failed to open file manager at {}: {e}", path.display());
        }
    }

    fn open_with_default_app(&self, path: &Path) {
        if let Err(e) = open::that_detached(path) {
            eprintln!("Failed to open {}: {e}", path.display());
        }
    }
}

/// A launch call observed by [`RecordingLauncher`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchEvent {
    FileManager(PathBuf),
    DefaultApp(PathBuf),
}

/// Test double that records launch calls instead of issuing them
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    events: Mutex<Vec<LaunchEvent>>,
}

impl RecordingLauncher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The calls issued so far, in order
    #[must_use]
    pub fn events(&self) -> Vec<LaunchEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl Launcher for RecordingLauncher {
    fn open_in_file_manager(&self, path: &Path) {
        if let Ok(mut events) = self.events.lock() {
            events.push(LaunchEvent::FileManager(path.to_path_buf()));
        }
    }

    fn open_with_default_app(&self, path: &Path) {
        if let Ok(mut events) = self.events.lock() {
            events.push(LaunchEvent::DefaultApp(path.to_path_buf()));
        }
    }
}
