pub mod grouper;
pub mod index;
pub mod pattern;

pub use grouper::{classify, find_duplicates, validate_root, DupResults, DuplicateGroup, ScanConfig};
pub use index::{scan_tree, NameIndex, ScanOutcome, ScannedFile};
pub use pattern::{
    is_numbered, is_numbered_os, numbered_base_name, parse_numbered, DelimiterPair, NumberedName,
    DELIMITERS,
};
