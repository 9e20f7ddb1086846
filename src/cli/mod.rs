//! Command handlers behind `main.rs`

pub mod orchestration;

pub use orchestration::{
    run_categories, run_changelog, run_parse, run_validate, run_version, ChangelogArgs,
    MessageSource, ParseArgs, ValidateArgs, VersionArgs, VersionOutcome,
};
