//! Command workflows behind the CLI
//!
//! Each `run_*` function takes plain argument structs rather than clap types,
//! so the workflows can be called programmatically and tested without a
//! process boundary. Workflows return their output; printing is left to
//! `main.rs`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::analyzer::{bump_for_commits, VersionAnalyzer};
use crate::changelog::ChangeLog;
use crate::config::Config;
use crate::domain::{BumpKind, ChangelogDomain, Commit, CommitMessage, Version, CATEGORIES};
use crate::error::CommitKitError;
use crate::git::{self, Git2Repository, Repository};
use crate::parser;
use crate::ui::{self, OutputFormat};
use crate::validate::{self, ValidationReport};

/// Where a commit message comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// Message text given directly
    Text(String),
    /// Path of a file holding the message, e.g. `.git/COMMIT_EDITMSG`
    File(PathBuf),
    /// Revision whose message is read from the repository
    Commit(String),
    /// Standard input
    Stdin,
}

impl MessageSource {
    /// Pick the single source given on the command line.
    ///
    /// `-` as a file name means standard input.
    ///
    /// # Returns
    /// * `Err` - If none or more than one source is given
    pub fn from_options(
        message: Option<String>,
        file: Option<PathBuf>,
        commit: Option<String>,
    ) -> crate::Result<Self> {
        match (message, file, commit) {
            (Some(text), None, None) => Ok(MessageSource::Text(text)),
            (None, Some(path), None) if path.as_os_str() == "-" => Ok(MessageSource::Stdin),
            (None, Some(path), None) => Ok(MessageSource::File(path)),
            (None, None, Some(rev)) => Ok(MessageSource::Commit(rev)),
            (None, None, None) => Err(CommitKitError::usage(
                "one of --message, --file or --commit is required",
            )),
            _ => Err(CommitKitError::usage(
                "only one of --message, --file or --commit may be given",
            )),
        }
    }

    /// Read the raw message text
    pub fn read(&self, repo_path: &Path) -> Result<String> {
        match self {
            MessageSource::Text(text) => Ok(text.clone()),
            MessageSource::File(path) => fs::read_to_string(path)
                .with_context(|| format!("failed to read message file {}", path.display())),
            MessageSource::Commit(rev) => {
                let repo = Git2Repository::open(repo_path)?;
                Ok(git::read_commit(&repo, rev)?.message)
            }
            MessageSource::Stdin => Ok(ui::read_stdin()?),
        }
    }
}

/// Arguments for the parse workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ParseArgs {
    pub source: MessageSource,
    pub format: OutputFormat,
    pub repo_path: PathBuf,
}

/// Parse a message and render it.
///
/// `Text` renders the canonical message; `Json` and `Yaml` render the
/// structured fields.
pub fn run_parse(args: &ParseArgs) -> Result<String> {
    let raw = args.source.read(&args.repo_path)?;
    let message: CommitMessage = parser::parse_message(&raw);
    debug!(category = message.category.tag, "parsed message");

    match args.format {
        OutputFormat::Text => Ok(message.message()),
        format => Ok(ui::render(&message, format)?),
    }
}

/// Arguments for the validate workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    pub source: MessageSource,
    pub repo_path: PathBuf,
}

/// Validate a message
///
/// A failed validation is still `Ok`; the caller decides the exit code from
/// [`ValidationReport::valid`].
pub fn run_validate(args: &ValidateArgs) -> Result<ValidationReport> {
    let raw = args.source.read(&args.repo_path)?;
    let report = validate::validate_message(&raw);
    info!(
        valid = report.valid,
        errors = report.errors.len(),
        "validated message"
    );
    Ok(report)
}

/// Render the category table
pub fn run_categories(format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(ui::format_category_table(CATEGORIES)),
        OutputFormat::Markdown => Ok(ui::format_category_markdown(CATEGORIES)),
        format => Ok(ui::render(&CATEGORIES, format)?),
    }
}

/// Arguments for the changelog workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogArgs {
    pub repo_path: PathBuf,
    /// Start of the range (exclusive); defaults to the latest version tag
    pub from: Option<String>,
    pub to: String,
    pub domain: ChangelogDomain,
    /// Force plain text regardless of configuration
    pub plain: bool,
}

/// Generate the changelog for a revision range
pub fn run_changelog(args: &ChangelogArgs, config: &Config) -> Result<String> {
    let repo = Git2Repository::open(&args.repo_path)?;
    let from = match &args.from {
        Some(from) => Some(from.clone()),
        None => git::latest_version_tag(&repo)?.map(|(tag, _)| tag),
    };

    let commits = git::list_commits(&repo, from.as_deref(), &args.to)?;
    info!(
        from = from.as_deref().unwrap_or("<root>"),
        to = %args.to,
        commits = commits.len(),
        "generating changelog"
    );

    let changelog = ChangeLog::from_config(args.domain, &commits, &config.changelog)
        .with_markdown(config.changelog.markdown && !args.plain);
    Ok(changelog.text())
}

/// Arguments for the version workflow
#[derive(Debug, Clone, PartialEq)]
pub struct VersionArgs {
    pub repo_path: PathBuf,
    /// Current version or version tag; defaults to the latest version tag
    pub current: Option<String>,
    /// Start of the range (exclusive); defaults to the current version's tag
    pub from: Option<String>,
    pub to: String,
}

/// Result of the version workflow
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionOutcome {
    /// Tag the range started from, if any
    pub from: Option<String>,
    pub current: Option<Version>,
    pub bump: BumpKind,
    pub next: Version,
    /// Tag name for `next`
    pub tag: String,
    #[serde(skip)]
    pub commits: Vec<Commit>,
}

/// Determine the next version from the commits since the current one.
///
/// Without a current version, the initial version is proposed unchanged.
pub fn run_version(args: &VersionArgs, config: &Config) -> Result<VersionOutcome> {
    let repo = Git2Repository::open(&args.repo_path)?;

    let (current_tag, current) = match &args.current {
        Some(current) => {
            // A current version that is also a tag starts the range.
            let tag = repo.resolve(current).ok().map(|_| current.clone());
            (tag, Some(config.version.apply(Version::parse(current)?)))
        }
        None => match git::latest_version_tag(&repo)? {
            Some((tag, version)) => (Some(tag), Some(config.version.apply(version))),
            None => (None, None),
        },
    };
    let from = args.from.clone().or(current_tag);

    let commits = git::list_commits(&repo, from.as_deref(), &args.to)?;
    let analyzer = VersionAnalyzer::new(config.version.clone());
    let next = match &current {
        Some(current) => analyzer.next_version(current, &commits)?,
        None => config.version.apply(Version::default()),
    };
    let bump = match &current {
        Some(_) => bump_for_commits(&commits),
        None => BumpKind::None,
    };

    Ok(VersionOutcome {
        from,
        current,
        bump,
        tag: config.version.tag_name(&next),
        next,
        commits,
    })
}
