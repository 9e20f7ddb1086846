//! User interface module - input handling and output rendering.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Reading user input and serializing results

use std::io::{self, Read};

use serde::Serialize;

use crate::error::{CommitKitError, Result};

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    commit_summary_lines, display_commit_analysis, display_error, display_status,
    display_success, display_validation_report, display_version_change, format_category_markdown,
    format_category_table,
};

/// Output format for structured results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human readable text
    #[default]
    Text,
    Json,
    Yaml,
    Markdown,
}

/// Serializes a value as pretty JSON or YAML.
///
/// # Returns
/// * `Err` - For formats without a serialized form (`Text`, `Markdown`)
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        other => Err(CommitKitError::usage(format!(
            "output format {:?} is not supported here",
            other
        ))),
    }
}

/// Reads the whole of standard input.
pub fn read_stdin() -> Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;

    #[test]
    fn test_render_json() {
        let rendered = render(&Version::new(1, 2, 3), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["major"], 1);
        assert_eq!(value["patch"], 3);
    }

    #[test]
    fn test_render_yaml() {
        let rendered = render(&Version::new(1, 2, 3), OutputFormat::Yaml).unwrap();
        assert!(rendered.contains("minor: 2"));
    }

    #[test]
    fn test_render_text_is_rejected() {
        assert!(render(&Version::new(1, 2, 3), OutputFormat::Text).is_err());
    }
}
