use regex::bytes::{Captures, Regex};
use std::ffi::{OsStr, OsString};
use std::sync::LazyLock;

/// A bracket pair that file managers use when numbering a name collision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterPair {
    pub open: char,
    pub close: char,
    pub label: &'static str,
}

/// Accepted bracket pairs. A name must use one pair consistently.
pub const DELIMITERS: &[DelimiterPair] = &[
    DelimiterPair {
        open: '(',
        close: ')',
        label: "ascii",
    },
    DelimiterPair {
        open: '（',
        close: '）',
        label: "full-width",
    },
];

static MATCHERS: LazyLock<Vec<(DelimiterPair, Regex)>> = LazyLock::new(|| {
    DELIMITERS
        .iter()
        .map(|pair| (*pair, compile_matcher(pair)))
        .collect()
});

fn compile_matcher(pair: &DelimiterPair) -> Regex {
    // The suffix sits directly before the last extension, so only the
    // innermost `(N)` is stripped from names like `a(1)(2).pdf`.
    // Base and extension accept arbitrary bytes so non-UTF-8 names match too.
    let pattern = format!(
        r"(?s)^(?P<base>(?-u:.)*){open}(?P<number>[0-9]+){close}(?P<ext>\.(?-u:[^.])+)$",
        open = regex::escape(&pair.open.to_string()),
        close = regex::escape(&pair.close.to_string()),
    );
    Regex::new(&pattern).expect("numbered duplicate pattern must compile")
}

/// A file name split into its numbered-duplicate parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedName<'a> {
    /// Everything before the opening bracket (may be empty)
    pub base: &'a str,
    /// The digits between the brackets
    pub number: &'a str,
    /// Final extension, including the leading dot
    pub extension: &'a str,
    /// Which bracket pair matched
    pub delimiters: DelimiterPair,
}

impl NumberedName<'_> {
    /// Name of the file this one is presumed to copy: `base + extension`
    pub fn base_name(&self) -> String {
        format!("{}{}", self.base, self.extension)
    }
}

/// Match a whole file name against the numbered-duplicate pattern
///
/// Returns `None` for names without a bracketed, digits-only suffix right
/// before the final extension.
pub fn parse_numbered(name: &str) -> Option<NumberedName<'_>> {
    MATCHERS.iter().find_map(|(pair, regex)| {
        let caps = regex.captures(name.as_bytes())?;
        Some(NumberedName {
            base: text(&caps, "base")?,
            number: text(&caps, "number")?,
            extension: text(&caps, "ext")?,
            delimiters: *pair,
        })
    })
}

/// Derive the base name for any file name the OS hands back
///
/// Unlike `parse_numbered` this also matches names that are not valid
/// UTF-8 (on Unix), keeping the undecodable bytes as they are.
pub fn numbered_base_name(name: &OsStr) -> Option<OsString> {
    let bytes = name_bytes(name)?;
    let caps = MATCHERS.iter().find_map(|(_, regex)| regex.captures(bytes))?;

    let mut base = caps.name("base")?.as_bytes().to_vec();
    base.extend_from_slice(caps.name("ext")?.as_bytes());
    os_string_from(base)
}

/// `numbered_base_name(name).is_some()`
pub fn is_numbered_os(name: &OsStr) -> bool {
    numbered_base_name(name).is_some()
}

fn text<'a>(caps: &Captures<'a>, group: &str) -> Option<&'a str> {
    std::str::from_utf8(caps.name(group)?.as_bytes()).ok()
}

#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Option<&[u8]> {
    use std::os::unix::ffi::OsStrExt;
    Some(name.as_bytes())
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Option<&[u8]> {
    name.to_str().map(str::as_bytes)
}

#[cfg(unix)]
fn os_string_from(bytes: Vec<u8>) -> Option<OsString> {
    use std::os::unix::ffi::OsStringExt;
    Some(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn os_string_from(bytes: Vec<u8>) -> Option<OsString> {
    String::from_utf8(bytes).ok().map(OsString::from)
}

/// Shortcut for `parse_numbered(name).is_some()`
pub fn is_numbered(name: &str) -> bool {
    parse_numbered(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_suffix() {
        let n = parse_numbered("report(1).pdf").unwrap();
        assert_eq!(n.base, "report");
        assert_eq!(n.number, "1");
        assert_eq!(n.extension, ".pdf");
        assert_eq!(n.delimiters.label, "ascii");
        assert_eq!(n.base_name(), "report.pdf");
    }

    #[test]
    fn test_full_width_suffix() {
        let n = parse_numbered("report（12）.pdf").unwrap();
        assert_eq!(n.number, "12");
        assert_eq!(n.delimiters.label, "full-width");
        assert_eq!(n.base_name(), "report.pdf");
    }

    #[test]
    fn test_no_separator_inserted() {
        assert_eq!(parse_numbered("my file (3).docx").unwrap().base_name(), "my file .docx");
        assert_eq!(parse_numbered("a.b(2).txt").unwrap().base_name(), "a.b.txt");
    }

    #[test]
    fn test_mixed_brackets_rejected() {
        assert!(!is_numbered("report(1）.pdf"));
        assert!(!is_numbered("report（1).pdf"));
    }

    #[test]
    fn test_non_digit_suffix_rejected() {
        assert!(!is_numbered("report().pdf"));
        assert!(!is_numbered("report(a).pdf"));
        assert!(!is_numbered("report(1a).pdf"));
        assert!(!is_numbered("report( 1).pdf"));
        assert!(!is_numbered("report(１).pdf"));
    }

    #[test]
    fn test_suffix_must_precede_last_extension() {
        assert!(!is_numbered("report(1)"));
        assert!(!is_numbered("report(1)."));
        assert!(!is_numbered("report(1).tar.gz"));
        assert!(!is_numbered("report(1)x.pdf"));
        assert!(!is_numbered("notes.txt"));
    }

    #[test]
    fn test_empty_base() {
        let n = parse_numbered("(1).pdf").unwrap();
        assert_eq!(n.base, "");
        assert_eq!(n.base_name(), ".pdf");
    }

    #[test]
    fn test_nested_suffix_strips_one_level() {
        let n = parse_numbered("a(1)(2).pdf").unwrap();
        assert_eq!(n.number, "2");
        assert_eq!(n.base_name(), "a(1).pdf");
    }

    #[test]
    fn test_os_name_matches_str_name() {
        let base = numbered_base_name(OsStr::new("report（2）.pdf")).unwrap();
        assert_eq!(base, OsString::from("report.pdf"));
        assert!(!is_numbered_os(OsStr::new("report.pdf")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_matches() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"r\xff(1).pdf");
        let base = numbered_base_name(name).unwrap();
        assert_eq!(base.as_bytes(), b"r\xff.pdf");
        assert!(!is_numbered_os(OsStr::from_bytes(b"r\xff(\xff).pdf")));
    }

    #[test]
    fn test_delimiter_table_is_consistent() {
        for pair in DELIMITERS {
            let name = format!("x{}7{}.bin", pair.open, pair.close);
            let n = parse_numbered(&name).unwrap();
            assert_eq!(n.delimiters, *pair);
        }
    }
}
