use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::index::{self, NameIndex, ScannedFile};
use super::pattern;
use crate::common::errors::SweepError;

/// Configuration for a duplicate scan
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Root directory to scan
    pub root: PathBuf,
    /// Show a spinner while walking
    pub show_progress: bool,
}

/// Numbered copies of one base file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Name of the file the candidates copy, e.g. `report.pdf`
    pub base_name: OsString,
    /// Candidate paths in walk order; never empty
    pub candidates: Vec<PathBuf>,
}

/// Complete results from a duplicate scan
#[derive(Debug, Clone)]
pub struct DupResults {
    /// Every scanned file name and where it lives
    pub index: NameIndex,
    /// Groups ordered by their first candidate's walk position
    pub groups: Vec<DuplicateGroup>,
    /// Total regular files scanned
    pub files_scanned: usize,
    /// Scan duration in seconds
    pub duration_secs: f64,
    /// Non-fatal walk errors
    pub errors: Vec<String>,
}

impl DupResults {
    /// Number of files that would be deleted
    pub fn total_candidates(&self) -> usize {
        self.groups.iter().map(|g| g.candidates.len()).sum()
    }

    /// Existing paths of a group's base file
    pub fn base_paths(&self, group: &DuplicateGroup) -> &[PathBuf] {
        self.index.paths(&group.base_name)
    }
}

/// Reject roots that are missing or are not directories
pub fn validate_root(root: &Path) -> Result<(), SweepError> {
    let reason = if !root.exists() {
        "does not exist"
    } else if !root.is_dir() {
        "is not a directory"
    } else {
        return Ok(());
    };
    Err(SweepError::InvalidRoot {
        path: root.to_path_buf(),
        reason,
    })
}

/// Group numbered-duplicate files under their base name
///
/// `index` must be built from the same complete file list: a candidate is
/// accepted only when its base name is a key of the index.
pub fn classify(files: &[ScannedFile], index: &NameIndex) -> Vec<DuplicateGroup> {
    let mut groups: Vec<DuplicateGroup> = Vec::new();
    let mut positions: HashMap<OsString, usize> = HashMap::new();

    for file in files {
        let Some(base_name) = pattern::numbered_base_name(&file.name) else {
            continue;
        };

        if !index.contains(&base_name) {
            debug!(
                "no base file '{}' for {}",
                base_name.to_string_lossy(),
                file.path.display()
            );
            continue;
        }

        let slot = *positions.entry(base_name).or_insert_with_key(|key| {
            groups.push(DuplicateGroup {
                base_name: key.clone(),
                candidates: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].candidates.push(file.path.clone());
    }

    groups
}

/// Run the full pipeline: walk, index, classify
pub fn find_duplicates(config: &ScanConfig) -> Result<DupResults, SweepError> {
    validate_root(&config.root)?;
    let start = std::time::Instant::now();

    // ── Pass 1: Walk and index ────────────────────────────────────────────
    let pb = make_spinner(config.show_progress, "Scanning files...");
    let scan = index::scan_tree(&config.root);
    let name_index = NameIndex::from_files(&scan.files);
    finish_spinner(pb, &format!("Scanned {} files", scan.files.len()));

    // ── Pass 2: Classify against the complete index ──────────────────────
    let groups = classify(&scan.files, &name_index);

    let results = DupResults {
        index: name_index,
        groups,
        files_scanned: scan.files.len(),
        duration_secs: start.elapsed().as_secs_f64(),
        errors: scan.errors,
    };

    info!(
        "{} duplicate groups ({} candidates) in {}",
        results.groups.len(),
        results.total_candidates(),
        config.root.display()
    );
    Ok(results)
}

// ── Progress helpers ──────────────────────────────────────────────────────────

fn make_spinner(show: bool, msg: &str) -> Option<ProgressBar> {
    if show {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Some(pb)
    } else {
        None
    }
}

fn finish_spinner(pb: Option<ProgressBar>, msg: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(msg.to_string());
    }
}
