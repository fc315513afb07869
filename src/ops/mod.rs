//! Operation catalog dispatch
//!
//! Each operation kind is a module with a handler that converts filesystem
//! outcomes into a [`StepResult`]. The [`Executor`] resolves location
//! arguments, dispatches exhaustively over the operation enum, and is the
//! boundary past which no handler failure ever propagates as an error.

pub mod bulk;
pub mod fsops;
pub mod media;
pub mod search;

use crate::StepResult;
use crate::launcher::Launcher;
use crate::locations::{self, AliasTable};
use crate::output;
use crate::plan::Operation;
use std::path::{Path, PathBuf};

/// Fixed reply for operation kinds outside the catalog
pub const UNRECOGNIZED_MESSAGE: &str =
    "Sorry, I couldn't understand that command. Please try again.";

/// Executes single operations against the filesystem
///
/// Holds the process-lifetime alias table, the current working location
/// used when an operation omits its location, and the platform launcher.
pub struct Executor<'a> {
    aliases: &'a AliasTable,
    current_path: PathBuf,
    launcher: &'a dyn Launcher,
}

impl<'a> Executor<'a> {
    #[must_use]
    pub fn new(aliases: &'a AliasTable, current_path: PathBuf, launcher: &'a dyn Launcher) -> Self {
        Self {
            aliases,
            current_path,
            launcher,
        }
    }

    /// Resolve a location token against the alias table and current path
    fn resolve(&self, token: &str) -> PathBuf {
        locations::resolve(self.aliases, token, &self.current_path)
    }

    /// Execute one operation, always producing a result
    ///
    /// This is a total function: I/O failures inside handlers come back as
    /// failed results, and an unrecognized kind gets a fixed clarification
    /// message rather than a fault.
    #[must_use]
    pub fn execute(&self, operation: &Operation) -> StepResult {
        match operation {
            Operation::CreateFolder {
                folder_name,
                location,
            } => fsops::create_folder(&self.resolve(location), folder_name),

            Operation::CreateFile {
                file_name,
                location,
                content,
            } => fsops::create_file(&self.resolve(location), file_name, content),

            Operation::Rename {
                old_name,
                new_name,
                location,
            } => fsops::rename_item(&self.resolve(location), old_name, new_name),

            Operation::Move {
                source,
                destination,
            } => fsops::move_item(&self.resolve(source), &self.resolve(destination)),

            Operation::MoveAll {
                source_dir,
                destination_dir,
            } => bulk::move_all(&self.resolve(source_dir), &self.resolve(destination_dir)),

            Operation::OpenLocation { location } => self.open_location(location),

            Operation::Search {
                search_term,
                search_path,
            } => self.search_files(search_term, search_path),

            Operation::PlayBestMatch { movie_name } => self.play_best_match(movie_name),

            Operation::Unrecognized => StepResult::fail(UNRECOGNIZED_MESSAGE),
        }
    }

    fn open_location(&self, location: &str) -> StepResult {
        let path = self.resolve(location);

        if !path.exists() {
            return StepResult::fail(format!("Location does not exist: {}", path.display()));
        }

        // Fire-and-forget; the result reports the path, not launcher success
        self.launcher.open_in_file_manager(&path);
        StepResult::ok(format!("Opened file explorer at: {}", path.display()))
    }

    fn search_files(&self, term: &str, search_path: &str) -> StepResult {
        let term = term.trim();
        if term.is_empty() {
            return StepResult::fail("No search term specified.");
        }

        let base = self.resolve(search_path);
        if !base.exists() {
            return StepResult::fail(format!(
                "Search location does not exist: {}",
                base.display()
            ));
        }

        let matches = search::find_matching(term, &base);

        if matches.is_empty() {
            return StepResult::fail(format!(
                "No files found containing '{term}' in {}",
                base.display()
            ));
        }

        println!("{}", output::search_table(term, &matches));
        StepResult::ok(format!(
            "Found {} files containing '{term}'",
            matches.len()
        ))
    }

    fn play_best_match(&self, name: &str) -> StepResult {
        let name = name.trim();
        if name.is_empty() {
            return StepResult::fail("No movie name specified.");
        }

        let Some(media_root) = self.media_root() else {
            return StepResult::fail("Movies directory is not configured.");
        };
        if !media_root.exists() {
            return StepResult::fail(format!(
                "Movies directory does not exist: {}",
                media_root.display()
            ));
        }

        match media::find_best(name, &media_root, media::VIDEO_EXTENSIONS) {
            Some(best) => {
                self.launcher.open_with_default_app(&best.path);
                let basename = best
                    .path
                    .file_name()
                    .map_or_else(|| best.path.display().to_string(), |n| {
                        n.to_string_lossy().into_owned()
                    });
                StepResult::ok(format!("Playing movie: {basename}"))
            }
            None => StepResult::fail(format!("No movie found with name '{name}'")),
        }
    }

    fn media_root(&self) -> Option<PathBuf> {
        self.aliases.media_root().map(Path::to_path_buf)
    }
}
