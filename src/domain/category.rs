//! The commit category table.
//!
//! Every commit header names exactly one category by its tag. Lookups never
//! fail: anything not in [`CATEGORIES`] resolves to [`Category::unknown`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::emoji;
use crate::error::CommitKitError;

/// Semantic version increment a category implies.
///
/// Ordered `None < Patch < Minor < Major`, so the dominant bump of a list is
/// its maximum.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BumpKind {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpKind::None => "none",
            BumpKind::Patch => "patch",
            BumpKind::Minor => "minor",
            BumpKind::Major => "major",
        };
        write!(f, "{}", name)
    }
}

/// Audience of a changelog.
///
/// `External` changes are user facing; `Internal` changes only matter to
/// the people working on the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangelogDomain {
    Internal,
    External,
}

impl ChangelogDomain {
    /// Category domains included in a changelog written for `self`.
    pub fn allowed(&self) -> &'static [ChangelogDomain] {
        match self {
            ChangelogDomain::Internal => &[ChangelogDomain::Internal, ChangelogDomain::External],
            ChangelogDomain::External => &[ChangelogDomain::External],
        }
    }
}

impl fmt::Display for ChangelogDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangelogDomain::Internal => write!(f, "internal"),
            ChangelogDomain::External => write!(f, "external"),
        }
    }
}

impl FromStr for ChangelogDomain {
    type Err = CommitKitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "internal" => Ok(ChangelogDomain::Internal),
            "external" => Ok(ChangelogDomain::External),
            other => Err(CommitKitError::usage(format!(
                "Unknown changelog domain: '{}'",
                other
            ))),
        }
    }
}

/// One row of the category table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub tag: &'static str,
    pub emoji: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub changelog_title: &'static str,
    pub changelog_domain: ChangelogDomain,
    pub version_bump: BumpKind,
    pub can_break: bool,
}

#[allow(clippy::too_many_arguments)]
const fn category(
    tag: &'static str,
    emoji: &'static str,
    display_name: &'static str,
    description: &'static str,
    changelog_title: &'static str,
    changelog_domain: ChangelogDomain,
    version_bump: BumpKind,
    can_break: bool,
) -> Category {
    Category {
        tag,
        emoji,
        display_name,
        description,
        changelog_title,
        changelog_domain,
        version_bump,
        can_break,
    }
}

use BumpKind as B;
use ChangelogDomain::{External, Internal};

/// All known categories in declared order. Changelog sections follow this
/// order.
#[rustfmt::skip]
pub static CATEGORIES: &[Category] = &[
    category("feat/new", ":sparkles:", "New Feature", "Introduce a new feature.", "New Features", External, B::Minor, true),
    category("feat/update", ":zap:", "Feature Update", "Improve or extend an existing feature.", "Improvements", External, B::Minor, true),
    category("feat/remove", ":fire:", "Feature Removal", "Remove a feature or public API.", "Removed", External, B::Major, true),
    category("fix", ":bug:", "Bug Fix", "Fix a bug.", "Bug Fixes", External, B::Patch, true),
    category("fix/security", ":lock:", "Security Fix", "Fix a security issue.", "Security", External, B::Patch, true),
    category("perf", ":racehorse:", "Performance", "Improve performance.", "Performance", External, B::Patch, false),
    category("style", ":lipstick:", "Style", "Update the user interface or its styles.", "Interface", External, B::Patch, false),
    category("i18n", ":globe_with_meridians:", "Localization", "Add or update translations.", "Localization", External, B::Patch, false),
    category("revert", ":rewind:", "Revert", "Revert an earlier change.", "Reverted", External, B::Patch, true),
    category("refactor", ":recycle:", "Refactor", "Restructure code without changing behavior.", "Refactoring", Internal, B::Patch, true),
    category("deps", ":package:", "Dependencies", "Add, update or remove dependencies.", "Dependencies", Internal, B::Patch, true),
    category("docs", ":open_book:", "Documentation", "Write or update documentation.", "Documentation", Internal, B::None, false),
    category("test", ":white_check_mark:", "Tests", "Add or update tests.", "Tests", Internal, B::None, false),
    category("build", ":construction_worker:", "Build", "Change the build system.", "Build System", Internal, B::None, false),
    category("ci", ":green_heart:", "Continuous Integration", "Change the CI configuration.", "Continuous Integration", Internal, B::None, false),
    category("chore", ":wrench:", "Chore", "Routine maintenance that fits no other category.", "Chores", Internal, B::None, false),
    category("release", ":bookmark:", "Release", "Tag or prepare a release.", "Releases", Internal, B::None, false),
    category("init", ":tada:", "Initial Commit", "Begin a project.", "Initial Commit", Internal, B::None, false),
];

static UNKNOWN: Category = category(
    "unknown",
    ":grey_question:",
    "Unknown",
    "The commit does not follow the message convention.",
    "Other Changes",
    Internal,
    B::None,
    false,
);

impl Category {
    /// The sentinel category for missing or unrecognized tags.
    pub fn unknown() -> &'static Category {
        &UNKNOWN
    }

    /// Finds a category by its tag.
    pub fn by_tag(tag: &str) -> Option<&'static Category> {
        CATEGORIES.iter().find(|c| c.tag == tag)
    }

    /// Finds a category by its emoji, given either as `:shortcode:` or glyph.
    pub fn by_emoji(emoji: &str) -> Option<&'static Category> {
        let shortcode = if emoji::is_shortcode(emoji) {
            emoji
        } else {
            emoji::shortcode_for(emoji)?
        };
        CATEGORIES.iter().find(|c| c.emoji == shortcode)
    }

    /// Resolves a tag to a category, falling back to [`Category::unknown`].
    pub fn resolve(tag: &str) -> &'static Category {
        Self::by_tag(tag).unwrap_or(&UNKNOWN)
    }

    pub fn is_unknown(&self) -> bool {
        self.tag == UNKNOWN.tag
    }

    /// The emoji glyph for this category.
    pub fn glyph(&self) -> &'static str {
        emoji::emojify(self.emoji)
    }

    /// Position in the declared table order; the sentinel sorts last.
    pub fn position(&self) -> usize {
        CATEGORIES
            .iter()
            .position(|c| c.tag == self.tag)
            .unwrap_or(CATEGORIES.len())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}
