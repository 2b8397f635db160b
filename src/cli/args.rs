use clap::Parser;

/// dupsweep: remove numbered duplicate downloads
#[derive(Parser, Debug)]
#[command(
    name = "dupsweep",
    version,
    about = "Find and remove numbered duplicates like report(1).pdf",
    long_about = "dupsweep scans a folder for files named like `report(1).pdf` or `report（2）.pdf`\n\
                   and, when `report.pdf` exists somewhere in the same tree, offers to delete\n\
                   the numbered copies. Nothing is removed until you confirm with 1.",
    after_help = "EXAMPLES:\n  \
        dupsweep                      Ask for the folder interactively\n  \
        dupsweep ~/Downloads          Scan Downloads, then confirm deletion\n  \
        dupsweep ~/Downloads --dry-run  Only show what would be deleted"
)]
pub struct Cli {
    /// Folder to scan (prompted for when omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Report duplicates without asking to delete them
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose output
    #[arg(long, short)]
    pub verbose: bool,
}
