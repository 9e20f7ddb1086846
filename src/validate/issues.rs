use super::{split_list, ValidationError, Validator};

/// Rules for a comma-separated list of issue numbers
#[derive(Debug, Clone)]
pub struct IssuesValidator {
    raw: String,
}

impl IssuesValidator {
    pub fn new(raw: impl Into<String>) -> Self {
        IssuesValidator { raw: raw.into() }
    }
}

fn parse_issue(entry: &str) -> Option<u32> {
    if entry.chars().all(|c| c.is_ascii_digit()) {
        entry.parse().ok()
    } else {
        None
    }
}

impl Validator for IssuesValidator {
    type Output = Vec<u32>;

    fn normalized(&self) -> String {
        split_list(&self.raw).join(", ")
    }

    fn errors(&self) -> Vec<ValidationError> {
        split_list(&self.raw)
            .into_iter()
            .filter(|entry| parse_issue(entry).is_none())
            .map(|entry| ValidationError::fatal(format!("invalid issue number '{}'", entry)))
            .collect()
    }

    /// Valid entries only; invalid ones are reported by `errors`.
    fn parsed(&self) -> Vec<u32> {
        split_list(&self.raw)
            .iter()
            .filter_map(|entry| parse_issue(entry))
            .collect()
    }
}
