//! Whole-message validation

use serde::Serialize;
use tracing::debug;

use super::{AuthorsValidator, BodyValidator, ScopeValidator, SubjectValidator};
use super::{ValidationError, Validator};
use crate::domain::Category;
use crate::parser::{self, FooterLine, Section};

/// Footer prefixes accepted by validation, compared case-insensitively
const FOOTER_PREFIXES: &[&str] = &["co-authored-by:", "closes", "signed-off-by:"];

/// Outcome of validating a complete message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        ValidationReport {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// One display string per error
    pub fn display_lines(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(ValidationError::display_string)
            .collect()
    }
}

/// Validate raw commit text.
///
/// Checks run in this order: category, emoji, breaking marker, scope,
/// subject, body, co-authors, footer prefixes. An unrecognized category
/// stops validation with a single error. Merge commits are always valid.
pub fn validate_message(raw: &str) -> ValidationReport {
    let first_line = raw.lines().next().unwrap_or("");
    if parser::is_merge(first_line) {
        debug!("merge commit, skipping validation");
        return ValidationReport::from_errors(Vec::new());
    }

    let header = parser::parse_commit_line(first_line);
    let category = match header.category.as_deref().and_then(Category::by_tag) {
        Some(category) => category,
        None => {
            return ValidationReport::from_errors(vec![ValidationError::fatal(
                "message is formatted incorrectly",
            )])
        }
    };

    let mut errors = Vec::new();

    if header.has_emoji() {
        let emoji_category = header
            .github_emoji
            .as_deref()
            .or(header.emoji.as_deref())
            .and_then(Category::by_emoji);
        if emoji_category.map(|c| c.tag) != Some(category.tag) {
            errors.push(ValidationError::fatal(format!(
                "invalid emoji for category {}",
                category.tag
            )));
        }
    }

    if header.breaking && !category.can_break {
        errors.push(ValidationError::fatal(format!(
            "category {} does not allow breaking changes",
            category.tag
        )));
    }

    let message = parser::parse_message(raw);

    errors.extend(ScopeValidator::new(message.scope.as_str()).errors());
    errors.extend(SubjectValidator::new(message.subject.as_str()).errors());

    if !message.message_body.is_empty() {
        errors.extend(BodyValidator::new(message.message_body.as_str()).errors());
    }

    for author in &message.co_authors {
        errors.extend(AuthorsValidator::new(author.as_str()).errors());
    }

    errors.extend(footer_errors(raw));

    debug!(
        category = category.tag,
        error_count = errors.len(),
        "validated commit message"
    );

    ValidationReport::from_errors(errors)
}

/// Every non-blank line from the first footer tag on must carry an accepted
/// prefix, and issue lines must carry a number that fits an issue id.
fn footer_errors(raw: &str) -> Vec<ValidationError> {
    let mut section = Section::Body;
    let mut errors = Vec::new();

    for line in raw.lines().skip(1) {
        if section == Section::Body && FooterLine::classify(line).is_some() {
            section = Section::Footer;
        }
        if section == Section::Body || line.trim().is_empty() {
            continue;
        }

        let lower = line.trim().to_lowercase();
        if !FOOTER_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
            errors.push(ValidationError::fatal(format!(
                "unrecognized prefix in footer line: {}",
                line.trim()
            )));
        } else if FooterLine::classify(line) == Some(FooterLine::Issue(None)) {
            errors.push(ValidationError::fatal(format!(
                "invalid issue number in footer line: {}",
                line.trim()
            )));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Level;

    fn messages(raw: &str) -> Vec<String> {
        validate_message(raw)
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect()
    }

    #[test]
    fn test_valid_message() {
        let report = validate_message(":open_book: docs(readme): add readme to the project");
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_invalid_emoji() {
        let report = validate_message(":raised_hands: docs(readme): add readme to the project");
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].message, "invalid emoji for category docs");
        assert_eq!(report.errors[0].level, Level::Fatal);
    }

    #[test]
    fn test_emoji_of_other_category() {
        assert_eq!(
            messages(":bug: docs(readme): add readme to the project"),
            vec!["invalid emoji for category docs"]
        );
    }

    #[test]
    fn test_glyph_emoji_accepted() {
        assert!(validate_message("📖 docs(readme): add readme to the project").valid);
    }

    #[test]
    fn test_missing_emoji_accepted() {
        assert!(validate_message("docs(readme): add readme to the project").valid);
    }

    #[test]
    fn test_merge_bypass() {
        let report = validate_message("Merge branch 'master' into develop");
        assert!(report.valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_unparseable_message() {
        assert_eq!(
            messages("Updated some stuff"),
            vec!["message is formatted incorrectly"]
        );
    }

    #[test]
    fn test_unknown_category_aborts() {
        assert_eq!(
            messages(":bug: bugfix(x): y\n\nlowercase body"),
            vec!["message is formatted incorrectly"]
        );
    }

    #[test]
    fn test_breaking_not_allowed() {
        assert_eq!(
            messages(":open_book: docs(readme)!: rewrite the whole readme"),
            vec!["category docs does not allow breaking changes"]
        );
        assert!(validate_message(":bug: fix(api)!: change error payload shape").valid);
    }

    #[test]
    fn test_scope_and_subject_errors_collected() {
        assert_eq!(
            messages(":bug: fix(ui): fix it"),
            vec![
                "scope must be between 3 and 20 characters long",
                "subject must be between 10 and 48 characters long",
            ]
        );
    }

    #[test]
    fn test_body_errors() {
        let raw = ":bug: fix(api): handle null values\n\nthe payload can be null";
        assert_eq!(
            messages(raw),
            vec![
                "body must start with an uppercase letter",
                "body must end with a period, question mark or exclamation mark",
            ]
        );
    }

    #[test]
    fn test_co_author_errors() {
        let raw = ":bug: fix(api): handle null values\n\nCo-authored-by: Jane Doe";
        assert_eq!(
            messages(raw),
            vec!["invalid co-author 'Jane Doe', expected 'Name <email>'"]
        );
    }

    #[test]
    fn test_full_valid_message() {
        let raw = ":bug: fix(parser): handle empty input\n\
                   \n\
                   Empty input used to panic.\n\
                   \n\
                   Closes #12\n\
                   Co-authored-by: Jane Doe <jane@example.com>\n\
                   Signed-off-by: John Roe <john@example.com>";
        assert!(validate_message(raw).valid);
    }

    #[test]
    fn test_unrecognized_footer_prefix() {
        let raw = ":bug: fix(api): handle null values\n\
                   \n\
                   Closes #3\n\
                   Fixes #4\n\
                   Reviewed-by: Someone";
        assert_eq!(
            messages(raw),
            vec![
                "unrecognized prefix in footer line: Fixes #4",
                "unrecognized prefix in footer line: Reviewed-by: Someone",
            ]
        );
    }

    #[test]
    fn test_issue_number_out_of_range() {
        let raw = ":bug: fix(api): handle null values\n\nCloses #99999999999";
        assert_eq!(
            messages(raw),
            vec!["invalid issue number in footer line: Closes #99999999999"]
        );
    }

    #[test]
    fn test_issue_line_without_number() {
        let raw = ":bug: fix(api): handle null values\n\nCloses #12\nCloses the ticket";
        assert_eq!(
            messages(raw),
            vec!["invalid issue number in footer line: Closes the ticket"]
        );
    }

    #[test]
    fn test_display_lines() {
        let report = validate_message(":raised_hands: docs(readme): add readme to the project");
        assert_eq!(
            report.display_lines(),
            vec!["\u{2757}\u{FE0F} fatal - invalid emoji for category docs"]
        );
    }
}
