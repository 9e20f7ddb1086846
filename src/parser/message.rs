//! Full-message parsing: header, body and footer.

use crate::domain::{Category, CommitMessage};
use crate::parser::header::parse_commit_line;
use tracing::debug;

/// Footer tags recognized on lines after the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterLine {
    CoAuthor(String),
    SignedOff(String),
    Issue(Option<u32>),
}

const ISSUE_KEYWORDS: &[&str] = &["closes", "closed", "close", "fixes", "fixed"];

impl FooterLine {
    /// Classify a line. Returns `None` for anything that is not a footer tag.
    pub fn classify(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();

        if lower.starts_with("co-authored-by") {
            return Some(FooterLine::CoAuthor(tag_value(trimmed, "co-authored-by")));
        }
        if lower.starts_with("signed-off-by") {
            return Some(FooterLine::SignedOff(tag_value(trimmed, "signed-off-by")));
        }
        if ISSUE_KEYWORDS.iter().any(|keyword| lower.starts_with(keyword)) {
            return Some(FooterLine::Issue(issue_number(trimmed)));
        }
        None
    }
}

/// Text after a case-insensitive ASCII prefix, with the `:` separator and
/// surrounding whitespace removed.
fn tag_value(line: &str, prefix: &str) -> String {
    line.get(prefix.len()..)
        .unwrap_or("")
        .trim()
        .trim_start_matches(':')
        .trim()
        .to_string()
}

/// The integer following the first `#` on the line.
fn issue_number(line: &str) -> Option<u32> {
    let (_, after) = line.split_once('#')?;
    let digits: String = after.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Position in the message while scanning lines after the header.
///
/// The only transition is `Body -> Footer`, taken on the first footer tag.
/// Untagged lines seen in `Footer` are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Body,
    Footer,
}

/// Parse raw commit text into a [`CommitMessage`].
///
/// Never fails. An unrecognized header leaves the category unknown and the
/// scope and subject empty.
pub fn parse_message(raw: &str) -> CommitMessage {
    let mut lines = raw.lines();
    let header = parse_commit_line(lines.next().unwrap_or(""));

    let mut message = CommitMessage {
        category: header
            .category
            .as_deref()
            .map(Category::resolve)
            .unwrap_or_else(Category::unknown),
        scope: header.scope.unwrap_or_default(),
        subject: header.subject.unwrap_or_default(),
        breaking: header.breaking,
        ..CommitMessage::default()
    };

    let mut section = Section::Body;
    let mut body: Vec<&str> = Vec::new();

    for line in lines {
        match FooterLine::classify(line) {
            Some(FooterLine::CoAuthor(author)) => message.co_authors.push(author),
            Some(FooterLine::SignedOff(name)) => message.signed_off = name,
            Some(FooterLine::Issue(issue)) => message.issues.extend(issue),
            None => {
                if section == Section::Body {
                    body.push(line);
                }
                continue;
            }
        }
        section = Section::Footer;
    }

    message.message_body = body.join("\n").trim().to_string();

    debug!(
        category = message.category.tag,
        issues = message.issues.len(),
        co_authors = message.co_authors.len(),
        "parsed commit message"
    );

    message
}
