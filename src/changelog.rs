//! Changelog generation
//!
//! Commits are grouped by category. Sections appear in the declared order of
//! the category table; commits keep their input order inside a section.

use crate::config::ChangelogConfig;
use crate::domain::{Category, ChangelogDomain, Commit, CATEGORIES};
use tracing::{debug, instrument};

/// Placeholder for the commit hash in link templates
pub const COMMIT_PLACEHOLDER: &str = "{{commit}}";

/// Commits of one category
#[derive(Debug, Clone)]
pub struct ChangelogSection<'a> {
    pub category: &'static Category,
    pub commits: Vec<&'a Commit>,
}

/// Changelog for one audience over a list of commits
#[derive(Debug, Clone)]
pub struct ChangeLog<'a> {
    domain: ChangelogDomain,
    commits: &'a [Commit],
    markdown: bool,
    header: String,
    footer: String,
    fallback: String,
    commit_url: Option<String>,
}

impl<'a> ChangeLog<'a> {
    /// Create a changelog with default rendering options
    pub fn new(domain: ChangelogDomain, commits: &'a [Commit]) -> Self {
        Self::from_config(domain, commits, &ChangelogConfig::default())
    }

    /// Create a changelog with rendering options from configuration
    pub fn from_config(
        domain: ChangelogDomain,
        commits: &'a [Commit],
        config: &ChangelogConfig,
    ) -> Self {
        ChangeLog {
            domain,
            commits,
            markdown: config.markdown,
            header: config.header.clone(),
            footer: config.footer.clone(),
            fallback: config.fallback.clone(),
            commit_url: config.commit_url.clone(),
        }
    }

    /// Render markdown headings and links, or plain text
    pub fn with_markdown(mut self, markdown: bool) -> Self {
        self.markdown = markdown;
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Text used when no commit matches the domain
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Link template for commits, e.g. `https://host/repo/commit/{{commit}}`
    pub fn with_commit_url(mut self, url: impl Into<String>) -> Self {
        self.commit_url = Some(url.into());
        self
    }

    /// Non-empty sections in table order
    pub fn sections(&self) -> Vec<ChangelogSection<'a>> {
        let allowed = self.domain.allowed();
        let commits: &'a [Commit] = self.commits;
        let included: Vec<&'a Commit> = commits
            .iter()
            .filter(|commit| {
                let category = commit.message.category;
                !category.is_unknown() && allowed.contains(&category.changelog_domain)
            })
            .collect();

        CATEGORIES
            .iter()
            .filter_map(|category| {
                let commits: Vec<&'a Commit> = included
                    .iter()
                    .copied()
                    .filter(|commit| commit.message.category.tag == category.tag)
                    .collect();
                (!commits.is_empty()).then_some(ChangelogSection { category, commits })
            })
            .collect()
    }

    /// Rendered changelog text
    #[instrument(skip(self), fields(domain = %self.domain, commit_count = self.commits.len()))]
    pub fn text(&self) -> String {
        let sections = self.sections();
        debug!(section_count = sections.len(), "changelog sections built");

        if sections.is_empty() {
            return self.fallback.trim().to_string();
        }

        let body = sections
            .iter()
            .map(|section| self.render_section(section))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!("{}\n{}\n{}", self.header, body, self.footer)
            .trim()
            .to_string()
    }

    fn render_section(&self, section: &ChangelogSection<'_>) -> String {
        let title = if self.markdown {
            format!("#### {}", section.category.changelog_title)
        } else {
            format!("{}:", section.category.changelog_title)
        };

        let mut lines = vec![title];
        lines.extend(
            section
                .commits
                .iter()
                .map(|commit| format!("- {}", self.render_subject(commit))),
        );
        lines.join("\n")
    }

    fn render_subject(&self, commit: &Commit) -> String {
        let subject = &commit.message.subject;
        match &self.commit_url {
            Some(template) if self.markdown && self.domain == ChangelogDomain::Internal => {
                format!(
                    "[{}]({})",
                    subject,
                    template.replace(COMMIT_PLACEHOLDER, &commit.hash)
                )
            }
            _ => subject.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits() -> Vec<Commit> {
        vec![
            Commit::new("aaa", ":bug: fix(api): handle null values"),
            Commit::new("bbb", ":open_book: docs(readme): add install section"),
            Commit::new("ccc", ":sparkles: feat/new(search): add fuzzy matching"),
            Commit::new("ddd", ":bug: fix(ui): fix button alignment"),
            Commit::new("eee", "Updated stuff"),
        ]
    }

    #[test]
    fn test_external_markdown() {
        let commits = commits();
        let text = ChangeLog::new(ChangelogDomain::External, &commits).text();
        assert_eq!(
            text,
            "#### New Features\n\
             - add fuzzy matching\n\
             \n\
             #### Bug Fixes\n\
             - handle null values\n\
             - fix button alignment"
        );
    }

    #[test]
    fn test_internal_includes_both_domains() {
        let commits = commits();
        let titles: Vec<&str> = ChangeLog::new(ChangelogDomain::Internal, &commits)
            .sections()
            .iter()
            .map(|s| s.category.changelog_title)
            .collect();
        assert_eq!(titles, vec!["New Features", "Bug Fixes", "Documentation"]);
    }

    #[test]
    fn test_plain_text() {
        let commits = commits();
        let text = ChangeLog::new(ChangelogDomain::External, &commits)
            .with_markdown(false)
            .text();
        assert!(text.starts_with("New Features:\n- add fuzzy matching"));
        assert!(!text.contains("####"));
    }

    #[test]
    fn test_commit_links_only_for_internal_markdown() {
        let commits = commits();
        let url = "https://example.com/repo/commit/{{commit}}";

        let internal = ChangeLog::new(ChangelogDomain::Internal, &commits)
            .with_commit_url(url)
            .text();
        assert!(internal.contains("- [handle null values](https://example.com/repo/commit/aaa)"));

        let external = ChangeLog::new(ChangelogDomain::External, &commits)
            .with_commit_url(url)
            .text();
        assert!(!external.contains("https://"));

        let plain = ChangeLog::new(ChangelogDomain::Internal, &commits)
            .with_commit_url(url)
            .with_markdown(false)
            .text();
        assert!(!plain.contains("https://"));
    }

    #[test]
    fn test_header_and_footer() {
        let commits = commits();
        let text = ChangeLog::new(ChangelogDomain::External, &commits)
            .with_header("## 1.2.0\n")
            .with_footer("\nThanks to all contributors.")
            .text();
        assert!(text.starts_with("## 1.2.0\n\n#### New Features"));
        assert!(text.ends_with("- fix button alignment\n\nThanks to all contributors."));
    }

    #[test]
    fn test_fallback_ignores_header_and_footer() {
        let commits = vec![
            Commit::new("a", ":open_book: docs(readme): add install section"),
            Commit::new("b", "Updated stuff"),
        ];
        let text = ChangeLog::new(ChangelogDomain::External, &commits)
            .with_header("HEADER")
            .with_footer("FOOTER")
            .with_fallback("  Nothing to see here.\n")
            .text();
        assert_eq!(text, "Nothing to see here.");
    }

    #[test]
    fn test_empty_commit_list_uses_default_fallback() {
        assert_eq!(
            ChangeLog::new(ChangelogDomain::Internal, &[]).text(),
            "No notable changes."
        );
    }

    #[test]
    fn test_section_order_follows_table_not_input() {
        let commits = vec![
            Commit::new("1", ":wrench: chore(deps): tidy the lockfile"),
            Commit::new("2", ":bug: fix(api): handle null values"),
            Commit::new("3", ":tada: init(repo): begin the project"),
            Commit::new("4", ":sparkles: feat/new(api): add search endpoint"),
        ];
        let titles: Vec<&str> = ChangeLog::new(ChangelogDomain::Internal, &commits)
            .sections()
            .iter()
            .map(|s| s.category.changelog_title)
            .collect();
        assert_eq!(
            titles,
            vec!["New Features", "Bug Fixes", "Chores", "Initial Commit"]
        );
    }
}
