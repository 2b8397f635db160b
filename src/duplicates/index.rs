use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// A regular file found while walking the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    /// File name only
    pub name: OsString,
    /// Path as walked (root joined with the relative path)
    pub path: PathBuf,
}

impl ScannedFile {
    /// Build from a path, taking its final component as the name
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let name = path.file_name()?.to_os_string();
        Some(Self { name, path })
    }
}

/// Everything a single walk produced
#[derive(Debug, Default)]
pub struct ScanOutcome {
    /// Regular files in walk order
    pub files: Vec<ScannedFile>,
    /// Entries that could not be read
    pub errors: Vec<String>,
}

/// Walk `root` once, collecting every regular file beneath it
///
/// Entries are visited depth-first and sorted by name inside each directory,
/// so the order is stable for an unchanged tree. Symlinks are neither
/// followed nor collected.
pub fn scan_tree(root: &Path) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    outcome.files.push(ScannedFile {
                        name: entry.file_name().to_os_string(),
                        path: entry.into_path(),
                    });
                }
            }
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                outcome.errors.push(e.to_string());
            }
        }
    }

    debug!(
        "walked {}: {} files, {} errors",
        root.display(),
        outcome.files.len(),
        outcome.errors.len()
    );
    outcome
}

/// File name -> every path carrying that name, in walk order
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    entries: HashMap<OsString, Vec<PathBuf>>,
}

impl NameIndex {
    /// Index a complete list of scanned files
    pub fn from_files(files: &[ScannedFile]) -> Self {
        let mut entries: HashMap<OsString, Vec<PathBuf>> = HashMap::new();
        for file in files {
            entries
                .entry(file.name.clone())
                .or_default()
                .push(file.path.clone());
        }
        Self { entries }
    }

    pub fn contains(&self, name: impl AsRef<OsStr>) -> bool {
        self.entries.contains_key(name.as_ref())
    }

    /// All paths for `name`, empty when the name was never seen
    pub fn paths(&self, name: impl AsRef<OsStr>) -> &[PathBuf] {
        self.entries
            .get(name.as_ref())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
