pub mod hierarchy;
pub mod keys;
pub mod report;

pub use hierarchy::IndexType;
pub use report::{NoteOutcome, RunMode, RunReport};
