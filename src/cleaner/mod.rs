pub mod engine;

pub use engine::{delete_candidate, delete_candidates, DeletionOutcome, DeletionRecord, DeletionReport};
