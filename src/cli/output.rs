use colored::*;
use std::path::Path;

use crate::cleaner::{DeletionOutcome, DeletionRecord, DeletionReport};
use crate::common::format::{self, file_label, format_count, format_duration, format_path};
use crate::common::permissions;
use crate::duplicates::DupResults;

// ─── Scan ─────────────────────────────────────────────────────────────────────

pub fn print_scan_banner(root: &Path) {
    println!();
    println!("  {} Scanning for numbered duplicates in: {}", "🔍", format_path(root).cyan());
    println!();
}

pub fn print_no_matches(results: &DupResults) {
    println!();
    println!(
        "  {} No numbered duplicates found ({} scanned in {}).",
        "✨",
        format_count(results.files_scanned),
        format_duration(results.duration_secs)
    );
    println!(
        "     A match needs a base file such as {} and a copy such as {} or {}.",
        "report.pdf".cyan(),
        "report(1).pdf".cyan(),
        "report（1）.pdf".cyan()
    );
    print_walk_errors(&results.errors);
    println!();
}

/// List every group: base file locations, then each candidate with its status
pub fn print_groups(results: &DupResults) {
    format::print_header("Numbered duplicates (base files are kept)");
    println!(
        "  {} candidates in {} groups, {} scanned in {}",
        results.total_candidates().to_string().cyan(),
        results.groups.len().to_string().cyan(),
        format_count(results.files_scanned),
        format_duration(results.duration_secs)
    );

    for group in &results.groups {
        println!();
        println!("  {} {}", "Base file:".bold(), group.base_name.to_string_lossy().green().bold());
        for base in results.base_paths(group) {
            println!("      {} {}", "keep →".dimmed(), base.display());
        }

        println!("    To delete:");
        for path in &group.candidates {
            let status = match status_label(path) {
                DELETABLE => DELETABLE.green(),
                other => other.red(),
            };
            println!("      {}: {}", status, file_label(path));
            println!("         {} {}", "path:".dimmed(), path.display());
        }
    }

    print_walk_errors(&results.errors);
    println!();
}

pub const DELETABLE: &str = "deletable";
pub const ACCESS_DENIED: &str = "access denied";

/// Report-phase label for a candidate, from a non-mutating writability check
pub fn status_label(path: &Path) -> &'static str {
    match permissions::check_writable(path) {
        Ok(()) => DELETABLE,
        Err(_) => ACCESS_DENIED,
    }
}

pub fn print_walk_errors(errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    println!();
    println!(
        "  {} {} could not be read and were skipped:",
        "⚠".yellow(),
        if errors.len() == 1 { "1 entry".to_string() } else { format!("{} entries", errors.len()) }
    );
    for e in errors {
        println!("      {}", e.dimmed());
    }
}

// ─── Delete ───────────────────────────────────────────────────────────────────

pub fn print_cancelled() {
    println!("  {} Cancelled, no files were deleted.", "✗".red());
}

pub fn print_delete_start(total: usize) {
    println!();
    println!("  Deleting {}...", format_count(total));
}

/// One line per processed file, printed as soon as it is known
pub fn print_outcome(record: &DeletionRecord) {
    match &record.outcome {
        DeletionOutcome::Deleted => {
            println!("  {} Deleted: {}", "✓".green(), file_label(&record.path));
        }
        failure => {
            println!(
                "  {} Failed: {} - {}",
                "✗".red(),
                file_label(&record.path),
                failure
            );
        }
    }
}

pub fn print_summary(report: &DeletionReport) {
    println!();
    println!(
        "  Done. Deleted {}/{} files.",
        report.succeeded().to_string().green().bold(),
        report.total()
    );

    if !report.has_failures() {
        println!();
        return;
    }

    print_failure_section("Permission denied", &report.permission_denied());
    print_failure_section("Other failures", &report.other_failures());

    println!();
    println!("  {} {}", "ℹ️", permissions::permission_hint());
    println!();
}

fn print_failure_section(title: &str, records: &[&DeletionRecord]) {
    if records.is_empty() {
        return;
    }
    println!();
    println!("  {} ({}):", title.red().bold(), records.len());
    for record in records {
        println!(
            "    {} - {}",
            file_label(&record.path),
            record.outcome.reason().unwrap_or("unknown error")
        );
        println!("       {} {}", "path:".dimmed(), record.path.display());
    }
}
