//! Location name resolution
//!
//! Maps human-friendly location tokens ("desktop", "drive d", "docs") to
//! absolute paths using an alias table seeded once at startup. Resolution is
//! a pure path computation: the resolver never touches the filesystem, so a
//! resolved path may well point at a location that does not exist yet -
//! existence is the concern of whichever handler receives the path.

use regex::Regex;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

/// Drive/volume reference pattern: "d", "d:", "drive d"
static DRIVE_REF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:drive\s+)?([a-zA-Z])[:\s]?$").unwrap());

/// Immutable mapping from well-known location names to absolute paths
///
/// Built once per process run from platform-provided directories (plus one
/// entry per storage volume where the platform exposes several) and never
/// mutated afterwards. Keys are stored normalized: lower-cased and trimmed.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: HashMap<String, PathBuf>,
    volumes: HashMap<char, PathBuf>,
}

impl AliasTable {
    /// Build the alias table from the platform's well-known directories
    ///
    /// Seeds home, desktop, downloads, documents, pictures, music, videos
    /// and the movies root, together with common spelling variants. The
    /// movies root defaults to `<home>/Movies` unless overridden.
    ///
    /// On Windows, every drive root that exists at startup is probed once
    /// and seeded under its letter and "drive X" style variants; the table
    /// is never re-queried mid-run.
    #[must_use]
    pub fn from_platform(movies_override: Option<&Path>) -> Self {
        let mut table = Self::default();

        if let Some(home) = dirs::home_dir() {
            let movies_root = movies_override
                .map(Path::to_path_buf)
                .unwrap_or_else(|| home.join("Movies"));

            table.insert_alias("home", home.clone());
            table.insert_alias("movies", movies_root);

            if let Some(desktop) = dirs::desktop_dir() {
                table.insert_alias("desktop", desktop.clone());
                table.insert_alias("my desktop", desktop);
            }
            if let Some(downloads) = dirs::download_dir() {
                table.insert_alias("downloads", downloads.clone());
                table.insert_alias("my downloads", downloads);
            }
            if let Some(documents) = dirs::document_dir() {
                table.insert_alias("documents", documents.clone());
                table.insert_alias("docs", documents.clone());
                table.insert_alias("my documents", documents);
            }
            if let Some(pictures) = dirs::picture_dir() {
                table.insert_alias("pictures", pictures.clone());
                table.insert_alias("pics", pictures.clone());
                table.insert_alias("photos", pictures);
            }
            if let Some(music) = dirs::audio_dir() {
                table.insert_alias("music", music);
            }
            if let Some(videos) = dirs::video_dir() {
                table.insert_alias("videos", videos);
            }
        }

        #[cfg(windows)]
        table.seed_windows_volumes();

        table
    }

    /// Build a table from explicit entries, for deterministic tests
    #[must_use]
    pub fn from_entries<I, V>(aliases: I, volumes: V) -> Self
    where
        I: IntoIterator<Item = (String, PathBuf)>,
        V: IntoIterator<Item = (char, PathBuf)>,
    {
        let mut table = Self::default();
        for (name, path) in aliases {
            table.insert_alias(&name, path);
        }
        for (letter, root) in volumes {
            table.volumes.insert(letter.to_ascii_lowercase(), root);
        }
        table
    }

    fn insert_alias(&mut self, name: &str, path: PathBuf) {
        self.aliases.insert(name.trim().to_lowercase(), path);
    }

    #[cfg(windows)]
    fn seed_windows_volumes(&mut self) {
        for letter in 'c'..='z' {
            let root = PathBuf::from(format!("{}:\\", letter.to_ascii_uppercase()));
            if root.exists() {
                self.insert_alias(&letter.to_string(), root.clone());
                self.insert_alias(&format!("drive {letter}"), root.clone());
                self.insert_alias(&format!("drive_{letter}"), root.clone());
                self.insert_alias(&format!("{letter}_drive"), root.clone());
                self.volumes.insert(letter, root);
            }
        }
    }

    /// Look up an alias by its (case-insensitive, trimmed) name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PathBuf> {
        self.aliases.get(&name.trim().to_lowercase())
    }

    /// Look up a volume root by drive letter
    #[must_use]
    pub fn volume_root(&self, letter: char) -> Option<&PathBuf> {
        self.volumes.get(&letter.to_ascii_lowercase())
    }

    /// All alias entries, sorted by name for stable display
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &Path)> {
        let mut entries: Vec<(&str, &Path)> = self
            .aliases
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_path()))
            .collect();
        entries.sort_by_key(|(name, _)| *name);
        entries
    }

    /// The designated media root (the "movies" alias), if seeded
    #[must_use]
    pub fn media_root(&self) -> Option<&Path> {
        self.get("movies").map(PathBuf::as_path)
    }
}

/// Resolve a location token to an absolute path
///
/// Rules, applied in order:
///
/// 1. Empty token resolves to `current`.
/// 2. A token that is already an absolute path is returned unchanged.
/// 3. A token found in the alias table resolves to the mapped path.
/// 4. A drive reference ("d", "drive d") resolves to that volume root when
///    the table knows it.
/// 5. A token that already carries a volume qualifier (`X:...`) is returned
///    unchanged.
/// 6. Anything else is joined onto `current` and normalized lexically.
///
/// Never fails and performs no I/O.
#[must_use]
pub fn resolve(aliases: &AliasTable, token: &str, current: &Path) -> PathBuf {
    let token = token.trim();
    if token.is_empty() {
        return current.to_path_buf();
    }

    let path = Path::new(token);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Some(mapped) = aliases.get(token) {
        return mapped.clone();
    }

    if let Some(captures) = DRIVE_REF.captures(token) {
        let letter = captures[1]
            .chars()
            .next()
            .map(|c| c.to_ascii_lowercase())
            .unwrap_or('c');
        if let Some(root) = aliases.volume_root(letter) {
            return root.clone();
        }
    }

    if has_volume_qualifier(token) {
        return PathBuf::from(token);
    }

    normalize(&current.join(token))
}

/// True when the token starts with a `X:` drive qualifier
fn has_volume_qualifier(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() > 1 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Lexically normalize a path: resolve `.` and `..`, collapse separators
///
/// `..` segments at the root are dropped rather than kept, matching what
/// the platform would do when the path is actually opened.
#[must_use]
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    normalized.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                ) {
                    normalized.pop();
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}
