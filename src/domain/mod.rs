//! Domain model - categories, commit messages and versions

pub mod category;
pub mod emoji;
pub mod message;
pub mod version;

pub use category::{BumpKind, Category, ChangelogDomain, CATEGORIES};
pub use message::{Commit, CommitMessage, CommitMessageJson};
pub use version::{ReleaseTrack, Version, VersionJson};
