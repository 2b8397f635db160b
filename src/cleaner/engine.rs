use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::common::permissions;
use crate::duplicates::pattern;
use crate::duplicates::DuplicateGroup;

/// What happened to one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// File removed
    Deleted,
    /// Existence or writability could not be established; removal not attempted
    PermissionDenied(String),
    /// Removal was attempted (or refused by the safety guard) and failed
    OtherFailure(String),
}

impl DeletionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeletionOutcome::Deleted)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            DeletionOutcome::Deleted => None,
            DeletionOutcome::PermissionDenied(r) | DeletionOutcome::OtherFailure(r) => Some(r.as_str()),
        }
    }
}

impl std::fmt::Display for DeletionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeletionOutcome::Deleted => write!(f, "deleted"),
            DeletionOutcome::PermissionDenied(r) => write!(f, "permission denied: {}", r),
            DeletionOutcome::OtherFailure(r) => write!(f, "{}", r),
        }
    }
}

/// One processed candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRecord {
    pub path: PathBuf,
    pub outcome: DeletionOutcome,
}

/// Report from a deletion batch, in processing order
#[derive(Debug, Default)]
pub struct DeletionReport {
    pub records: Vec<DeletionRecord>,
}

impl DeletionReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn succeeded(&self) -> usize {
        self.records.iter().filter(|r| r.outcome.is_success()).count()
    }

    pub fn permission_denied(&self) -> Vec<&DeletionRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, DeletionOutcome::PermissionDenied(_)))
            .collect()
    }

    pub fn other_failures(&self) -> Vec<&DeletionRecord> {
        self.records
            .iter()
            .filter(|r| matches!(r.outcome, DeletionOutcome::OtherFailure(_)))
            .collect()
    }

    /// Every record that is not `Deleted`
    pub fn failures(&self) -> Vec<&DeletionRecord> {
        self.records
            .iter()
            .filter(|r| !r.outcome.is_success())
            .collect()
    }

    pub fn has_failures(&self) -> bool {
        self.succeeded() < self.total()
    }
}

/// Delete every candidate of every group
///
/// Per-file failures are recorded and the batch carries on. `on_outcome` is
/// called as soon as each file has been processed.
pub fn delete_candidates<F>(groups: &[DuplicateGroup], mut on_outcome: F) -> DeletionReport
where
    F: FnMut(&DeletionRecord),
{
    let mut report = DeletionReport::default();

    for group in groups {
        for path in &group.candidates {
            let record = DeletionRecord {
                path: path.clone(),
                outcome: delete_candidate(path),
            };
            on_outcome(&record);
            report.records.push(record);
        }
    }

    info!(
        "deleted {}/{} candidates",
        report.succeeded(),
        report.total()
    );
    report
}

/// Make one candidate writable, then remove it
pub fn delete_candidate(path: &Path) -> DeletionOutcome {
    if !is_numbered_path(path) {
        warn!("refusing to delete non-numbered file: {}", path.display());
        return DeletionOutcome::OtherFailure("not a numbered duplicate, refusing to delete".into());
    }

    if let Err(e) = permissions::try_make_writable(path) {
        warn!("cannot make writable {}: {}", path.display(), e);
        return DeletionOutcome::PermissionDenied(e.to_string());
    }

    match try_remove(path) {
        Ok(()) => {
            info!("deleted {}", path.display());
            DeletionOutcome::Deleted
        }
        Err(e) => {
            warn!("failed to delete {}: {}", path.display(), e);
            DeletionOutcome::OtherFailure(e.to_string())
        }
    }
}

/// Remove a single file permanently
pub fn try_remove(path: &Path) -> std::io::Result<()> {
    std::fs::remove_file(path)
}

fn is_numbered_path(path: &Path) -> bool {
    path.file_name().is_some_and(pattern::is_numbered_os)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn group(base: &str, candidates: Vec<PathBuf>) -> DuplicateGroup {
        DuplicateGroup {
            base_name: base.into(),
            candidates,
        }
    }

    #[test]
    fn test_deletes_candidates_and_keeps_base() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("report.pdf");
        let dup = tmp.path().join("report(1).pdf");
        std::fs::write(&base, "a").unwrap();
        std::fs::write(&dup, "a").unwrap();

        let report = delete_candidates(&[group("report.pdf", vec![dup.clone()])], |_| {});

        assert_eq!(report.total(), 1);
        assert_eq!(report.succeeded(), 1);
        assert!(!dup.exists());
        assert!(base.exists());
    }

    #[test]
    fn test_guard_refuses_base_names() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("report.pdf");
        std::fs::write(&base, "a").unwrap();

        let outcome = delete_candidate(&base);
        assert!(matches!(outcome, DeletionOutcome::OtherFailure(_)));
        assert!(base.exists());
    }

    #[test]
    fn test_missing_candidate_is_permission_denied() {
        let tmp = TempDir::new().unwrap();
        let gone = tmp.path().join("gone(1).txt");

        let outcome = delete_candidate(&gone);
        assert_eq!(
            outcome,
            DeletionOutcome::PermissionDenied("file no longer exists".into())
        );
    }

    #[test]
    fn test_directory_candidate_is_other_failure() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("folder(1).d");
        std::fs::create_dir(&dir).unwrap();

        let outcome = delete_candidate(&dir);
        assert!(matches!(outcome, DeletionOutcome::OtherFailure(_)));
        assert!(dir.exists());
    }

    #[test]
    fn test_batch_continues_and_counts_add_up() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a(1).txt");
        let b = tmp.path().join("b(1).txt");
        std::fs::write(&a, "a").unwrap();

        let mut seen = Vec::new();
        let report = delete_candidates(
            &[group("a.txt", vec![a.clone()]), group("b.txt", vec![b.clone()])],
            |r| seen.push(r.path.clone()),
        );

        assert_eq!(seen, vec![a, b]);
        assert_eq!(report.total(), 2);
        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.permission_denied().len(), 1);
        assert!(report.other_failures().is_empty());
        assert_eq!(
            report.succeeded() + report.permission_denied().len() + report.other_failures().len(),
            report.total()
        );
        assert!(report.has_failures());
    }

    #[test]
    fn test_readonly_candidate_is_deleted() {
        let tmp = TempDir::new().unwrap();
        let dup = tmp.path().join("photo(2).jpg");
        std::fs::write(&dup, "x").unwrap();
        let mut perms = std::fs::metadata(&dup).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&dup, perms).unwrap();

        assert_eq!(delete_candidate(&dup), DeletionOutcome::Deleted);
        assert!(!dup.exists());
    }

    #[test]
    fn test_outcome_reason() {
        assert_eq!(DeletionOutcome::Deleted.reason(), None);
        assert_eq!(
            DeletionOutcome::OtherFailure("busy".into()).reason(),
            Some("busy")
        );
    }
}
