//! Pure formatting functions for UI output.
//!
//! Functions returning `String` have no side effects and are tested directly;
//! the `display_*` functions only print.

use console::style;

use crate::domain::{Category, Commit};
use crate::validate::ValidationReport;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Print the outcome of validating a message.
pub fn display_validation_report(report: &ValidationReport) {
    if report.valid {
        display_success("commit message is valid");
    } else {
        for line in report.display_lines() {
            eprintln!("{}", style(line).red());
        }
    }
}

/// Display the commits taken into account for a version bump.
///
/// Shows up to 10 commits; the remainder is summarized as a count.
pub fn display_commit_analysis(commits: &[Commit]) {
    eprintln!("\n{}", style(format!("Analyzing {} commits", commits.len())).bold());
    for line in commit_summary_lines(commits, 10) {
        eprintln!("{}", line);
    }
}

/// Summary lines for a commit list: `  {short hash} {tag} {subject}`
pub fn commit_summary_lines(commits: &[Commit], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = commits
        .iter()
        .take(limit)
        .map(|commit| {
            format!(
                "  {} {:<12} {}",
                commit.short_hash(),
                commit.message.category.tag,
                commit.message.subject
            )
        })
        .collect();

    if commits.len() > limit {
        lines.push(format!("  ... and {} more commits", commits.len() - limit));
    }
    lines
}

/// Display the proposed version change (or initial version).
pub fn display_version_change(current: Option<&str>, next: &str) {
    match current {
        Some(current) => {
            eprintln!("\n{}", style("Proposed Version Change:").bold());
            eprintln!("  From: {}", style(current).red());
            eprintln!("  To:   {}", style(next).green());
        }
        None => {
            eprintln!("\n{}", style("Initial Version:").bold());
            eprintln!("  New version: {}", style(next).green());
        }
    }
}

/// Aligned plain-text table of categories
pub fn format_category_table(categories: &[Category]) -> String {
    let tag_width = categories
        .iter()
        .map(|c| c.tag.len())
        .max()
        .unwrap_or(0)
        .max("TAG".len());
    let name_width = categories
        .iter()
        .map(|c| c.display_name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());

    let mut lines = vec![format!(
        "   {:<tag_width$}  {:<name_width$}  {:<8}  {:<5}  DESCRIPTION",
        "TAG", "NAME", "DOMAIN", "BUMP"
    )];
    lines.extend(categories.iter().map(|c| {
        format!(
            "{}  {:<tag_width$}  {:<name_width$}  {:<8}  {:<5}  {}",
            c.glyph(),
            c.tag,
            c.display_name,
            c.changelog_domain,
            c.version_bump,
            c.description
        )
    }));
    lines.join("\n")
}

/// Markdown table of categories
pub fn format_category_markdown(categories: &[Category]) -> String {
    let mut lines = vec![
        "| Emoji | Tag | Name | Description | Changelog | Bump | Breaking |".to_string(),
        "| --- | --- | --- | --- | --- | --- | --- |".to_string(),
    ];
    lines.extend(categories.iter().map(|c| {
        format!(
            "| {} `{}` | `{}` | {} | {} | {} ({}) | {} | {} |",
            c.glyph(),
            c.emoji,
            c.tag,
            c.display_name,
            c.description,
            c.changelog_title,
            c.changelog_domain,
            c.version_bump,
            if c.can_break { "yes" } else { "no" }
        )
    }));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CATEGORIES;

    #[test]
    fn test_display_error() {
        // Visual verification test - output is printed to stderr
        display_error("test error");
    }

    #[test]
    fn test_display_success() {
        // Visual verification test - output is printed to stdout
        display_success("test success");
    }

    #[test]
    fn test_commit_summary_lines_truncates() {
        let commits: Vec<Commit> = (0..12)
            .map(|i| Commit::new(format!("{:040}", i), ":bug: fix(api): handle null values"))
            .collect();
        let lines = commit_summary_lines(&commits, 10);
        assert_eq!(lines.len(), 11);
        assert!(lines[0].contains("fix"));
        assert!(lines[0].ends_with("handle null values"));
        assert_eq!(lines[10], "  ... and 2 more commits");
    }

    #[test]
    fn test_category_table_has_row_per_category() {
        let table = format_category_table(CATEGORIES);
        assert_eq!(table.lines().count(), CATEGORIES.len() + 1);
        assert!(table.contains("feat/new"));
        assert!(table.contains("Write or update documentation."));
    }

    #[test]
    fn test_category_markdown() {
        let markdown = format_category_markdown(CATEGORIES);
        let lines: Vec<&str> = markdown.lines().collect();
        assert_eq!(lines.len(), CATEGORIES.len() + 2);
        assert!(lines[2].starts_with("| ✨ `:sparkles:` | `feat/new` |"));
        assert!(lines[2].ends_with("| minor | yes |"));
    }
}
