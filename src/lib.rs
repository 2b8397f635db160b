//! # dupsweep
//!
//! Clean up numbered duplicate downloads.
//!
//! Browsers and file managers resolve name collisions by saving
//! `report(1).pdf` or `report（1）.pdf` next to `report.pdf`. dupsweep walks a
//! folder once, finds those numbered copies whose base file exists anywhere in
//! the tree, reports them, and deletes them after an explicit confirmation.
//!
//! - **Name-based**: matching looks at file names only, never contents
//! - **Two passes**: the full name index is built before any copy is accepted
//! - **Base files are never removed**: only names matching the numbered
//!   pattern reach the deletion step
//! - **Per-file outcomes**: one failure never stops the batch

pub mod cleaner;
pub mod cli;
pub mod common;
pub mod duplicates;
