use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use dupsweep::cleaner;
use dupsweep::cli::args::Cli;
use dupsweep::cli::output;
use dupsweep::cli::prompt::{self, Confirmation};
use dupsweep::common::format;
use dupsweep::duplicates::{self, ScanConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("dupsweep=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let mut input = std::io::stdin().lock();
    let mut out = std::io::stdout();

    // ── Root ──────────────────────────────────────────────────────────────
    let raw = match &cli.path {
        Some(path) => path.clone(),
        None => prompt::ask(&mut input, &mut out, "Folder to scan: ")?,
    };
    let root = prompt::parse_root_input(&raw);
    duplicates::validate_root(&root)?;

    // ── Scan ──────────────────────────────────────────────────────────────
    output::print_scan_banner(&root);
    let results = duplicates::find_duplicates(&ScanConfig {
        root,
        show_progress: true,
    })?;

    if results.groups.is_empty() {
        output::print_no_matches(&results);
        return Ok(());
    }

    output::print_groups(&results);

    if cli.dry_run {
        println!(
            "  {} Dry run, would delete {}. No files modified.",
            "ℹ️",
            format::format_count(results.total_candidates())
        );
        return Ok(());
    }

    // ── Confirm ───────────────────────────────────────────────────────────
    let answer = prompt::ask(
        &mut input,
        &mut out,
        &format!(
            "  {} Enter 0 to cancel, 1 to delete {}: ",
            "❓",
            format::format_count(results.total_candidates()).bold()
        ),
    )?;
    if Confirmation::from_input(&answer) == Confirmation::Cancel {
        output::print_cancelled();
        return Ok(());
    }

    // ── Delete ────────────────────────────────────────────────────────────
    output::print_delete_start(results.total_candidates());
    let report = cleaner::delete_candidates(&results.groups, output::print_outcome);
    output::print_summary(&report);

    Ok(())
}
