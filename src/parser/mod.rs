//! Commit message parsing
//!
//! Parsing is tolerant: malformed input yields a message with the unknown
//! category rather than an error. Validation reports what is wrong.

pub mod header;
pub mod message;

pub use header::{is_merge, parse_commit_line, HeaderLine};
pub use message::{parse_message, FooterLine, Section};
