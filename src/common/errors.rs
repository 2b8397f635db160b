use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that stop a run before anything is deleted.
/// `main` converts these to `anyhow` for reporting; per-file deletion
/// failures never surface here.
#[derive(Debug, Error)]
pub enum SweepError {
    /// The root to scan is missing or is not a directory
    #[error("Path {reason}: {}", .path.display())]
    InvalidRoot { path: PathBuf, reason: &'static str },

    /// Reading a prompt answer or flushing the prompt failed
    #[error("Failed to read input: {0}")]
    Prompt(#[from] std::io::Error),
}

/// Why a file could not be made (or predicted to be made) user-writable
#[derive(Debug, Error)]
pub enum WritabilityError {
    #[error("file no longer exists")]
    Missing,

    #[error("read-only and owned by another user")]
    NotOwner,

    #[error("cannot change permissions: {0}")]
    Denied(#[source] std::io::Error),
}
