use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::common::errors::SweepError;

/// Answer to the delete confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Cancel,
}

impl Confirmation {
    /// Only a literal `1` proceeds; anything else, including empty input, cancels
    pub fn from_input(input: &str) -> Self {
        if input.trim() == "1" {
            Confirmation::Proceed
        } else {
            Confirmation::Cancel
        }
    }
}

/// Print `question`, then read one line. EOF yields an empty string.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, SweepError> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Turn a typed or pasted folder path into a `PathBuf`
///
/// Surrounding quotes (left by drag-and-drop) are removed and a leading `~`
/// expands to the home directory.
pub fn parse_root_input(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|s| s.strip_suffix(*q))
        })
        .unwrap_or(trimmed);

    if unquoted == "~" || unquoted.starts_with("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(unquoted.trim_start_matches('~').trim_start_matches('/'));
        }
    }
    PathBuf::from(unquoted)
}
