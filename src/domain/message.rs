use crate::domain::Category;
use crate::error::Result;
use crate::parser;
use serde::{Deserialize, Serialize};

/// Structured commit message.
///
/// [`CommitMessage::message`] renders the canonical text, which
/// [`parser::parse_message`] reads back into the same fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "CommitMessageJson", from = "CommitMessageJson")]
pub struct CommitMessage {
    pub files: Vec<String>,
    pub category: &'static Category,
    pub scope: String,
    pub subject: String,
    pub message_body: String,
    pub breaking: bool,
    pub issues: Vec<u32>,
    pub co_authors: Vec<String>,
    pub signed_off: String,
}

impl Default for CommitMessage {
    fn default() -> Self {
        CommitMessage {
            files: Vec::new(),
            category: Category::unknown(),
            scope: String::new(),
            subject: String::new(),
            message_body: String::new(),
            breaking: false,
            issues: Vec::new(),
            co_authors: Vec::new(),
            signed_off: String::new(),
        }
    }
}

impl CommitMessage {
    /// Create a header-only message
    pub fn new(
        category: &'static Category,
        scope: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        CommitMessage {
            category,
            scope: scope.into(),
            subject: subject.into(),
            ..CommitMessage::default()
        }
    }

    /// The first line: `{emoji} {tag}({scope})[!]: {subject}`
    pub fn header(&self) -> String {
        format!(
            "{} {}({}){}: {}",
            self.category.emoji,
            self.category.tag,
            self.scope,
            if self.breaking { "!" } else { "" },
            self.subject
        )
    }

    /// Footer lines in canonical order: issues, co-authors, sign-off
    pub fn footer(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .issues
            .iter()
            .map(|issue| format!("Closes #{}", issue))
            .collect();
        lines.extend(
            self.co_authors
                .iter()
                .map(|author| format!("Co-authored-by: {}", author)),
        );
        if !self.signed_off.is_empty() {
            lines.push(format!("Signed-off-by: {}", self.signed_off));
        }
        lines
    }

    /// Canonical message text
    pub fn message(&self) -> String {
        let segments = [
            self.header(),
            self.message_body.trim().to_string(),
            self.footer().join("\n"),
        ];

        segments
            .iter()
            .filter(|segment| !segment.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("\n\n")
            .trim_end()
            .to_string()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Serialized form of a [`CommitMessage`]; the category is stored by tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitMessageJson {
    #[serde(default)]
    pub files: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message_body: String,
    #[serde(default)]
    pub breaking: bool,
    #[serde(default)]
    pub issues: Vec<u32>,
    #[serde(default)]
    pub co_authors: Vec<String>,
    #[serde(default)]
    pub signed_off: String,
}

impl From<CommitMessage> for CommitMessageJson {
    fn from(message: CommitMessage) -> Self {
        CommitMessageJson {
            files: message.files,
            category: message.category.tag.to_string(),
            scope: message.scope,
            subject: message.subject,
            message_body: message.message_body,
            breaking: message.breaking,
            issues: message.issues,
            co_authors: message.co_authors,
            signed_off: message.signed_off,
        }
    }
}

impl From<CommitMessageJson> for CommitMessage {
    fn from(json: CommitMessageJson) -> Self {
        CommitMessage {
            files: json.files,
            category: Category::resolve(&json.category),
            scope: json.scope,
            subject: json.subject,
            message_body: json.message_body,
            breaking: json.breaking,
            issues: json.issues,
            co_authors: json.co_authors,
            signed_off: json.signed_off,
        }
    }
}

/// A commit from repository history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub message: CommitMessage,
}

impl Commit {
    /// Parse raw message text into a commit
    pub fn new(hash: impl Into<String>, raw_message: &str) -> Self {
        Commit {
            hash: hash.into(),
            message: parser::parse_message(raw_message),
        }
    }

    /// Abbreviated hash for display
    pub fn short_hash(&self) -> &str {
        &self.hash[..7.min(self.hash.len())]
    }
}
