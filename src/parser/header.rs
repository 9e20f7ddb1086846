//! Tokenizer for the first line of a commit message.
//!
//! Grammar, read left to right:
//!
//! ```text
//! [<emoji> ]<category>(<scope>)[!][:] <subject>
//! ```
//!
//! * `emoji`: `:shortcode:` or a literal glyph, optional
//! * `category`: `[a-z0-9/]+`
//! * `scope`: `[a-z-]+`, parenthesized, required
//! * `!`: breaking marker, optional
//! * `:`: optional
//! * `subject`: words of `[a-z0-9/-]+` separated by single spaces

use crate::domain::emoji;

/// Fields recognized on a header line.
///
/// When `matched` is false every optional field is `None` and `breaking` is
/// false.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLine {
    pub matched: bool,
    /// Emoji as a `:shortcode:`
    pub github_emoji: Option<String>,
    /// Emoji as a glyph
    pub emoji: Option<String>,
    pub category: Option<String>,
    pub scope: Option<String>,
    pub breaking: bool,
    pub subject: Option<String>,
}

impl HeaderLine {
    fn no_match() -> Self {
        HeaderLine::default()
    }

    /// Whether an emoji of either form was present.
    pub fn has_emoji(&self) -> bool {
        self.github_emoji.is_some() || self.emoji.is_some()
    }
}

/// Returns true for lines starting with the word "merge", in any case.
///
/// Merge commits are exempt from the message convention.
pub fn is_merge(line: &str) -> bool {
    let first_word = line.trim_start().split_whitespace().next().unwrap_or("");
    first_word.eq_ignore_ascii_case("merge")
}

/// Parse a header line. Never fails; see [`HeaderLine::matched`].
pub fn parse_commit_line(line: &str) -> HeaderLine {
    parse_fields(line.trim_end()).unwrap_or_else(HeaderLine::no_match)
}

fn parse_fields(line: &str) -> Option<HeaderLine> {
    let mut cursor = Cursor::new(line);

    let (github_emoji, glyph) = match cursor.peek_token() {
        Some(token) if emoji::is_shortcode(token) => {
            cursor.advance(token.len());
            cursor.expect(' ')?;
            (
                Some(token.to_string()),
                emoji::glyph_for(token).map(str::to_string),
            )
        }
        Some(token) if emoji::is_glyph(token) => {
            cursor.advance(token.len());
            cursor.expect(' ')?;
            (
                emoji::shortcode_for(token).map(str::to_string),
                Some(token.to_string()),
            )
        }
        _ => (None, None),
    };

    // Digits are accepted so table tags such as `i18n` read back.
    let category =
        cursor.take_while(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '/')?;
    cursor.expect('(')?;
    let scope = cursor.take_while(|c| c.is_ascii_lowercase() || c == '-')?;
    cursor.expect(')')?;
    let breaking = cursor.accept('!');
    cursor.accept(':');
    cursor.expect(' ')?;

    let subject = cursor.rest();
    if !is_subject(subject) {
        return None;
    }

    Some(HeaderLine {
        matched: true,
        github_emoji,
        emoji: glyph,
        category: Some(category.to_string()),
        scope: Some(scope.to_string()),
        breaking,
        subject: Some(subject.to_string()),
    })
}

fn is_subject(text: &str) -> bool {
    !text.is_empty()
        && text.split(' ').all(|word| {
            !word.is_empty()
                && word
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '/')
        })
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Cursor { rest: input }
    }

    /// Text up to the next space, without consuming it.
    fn peek_token(&self) -> Option<&'a str> {
        let token = self.rest.split(' ').next()?;
        (!token.is_empty()).then_some(token)
    }

    fn advance(&mut self, bytes: usize) {
        self.rest = &self.rest[bytes..];
    }

    fn accept(&mut self, expected: char) -> bool {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn expect(&mut self, expected: char) -> Option<()> {
        self.accept(expected).then_some(())
    }

    /// Consume a non-empty run of characters matching `pred`.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> Option<&'a str> {
        let end = self
            .rest
            .char_indices()
            .find(|(_, c)| !pred(*c))
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(taken)
    }

    fn rest(&self) -> &'a str {
        self.rest
    }
}
