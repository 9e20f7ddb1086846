//! GitHub emoji shortcodes used by the category table and their glyphs.

use std::sync::OnceLock;

use regex::Regex;

/// Glyph returned by [`emojify`] for shortcodes outside the table
pub const FALLBACK_GLYPH: &str = "?";

/// Shortcode to glyph pairs, one per emoji the toolkit knows about.
const EMOJI: &[(&str, &str)] = &[
    (":sparkles:", "✨"),
    (":zap:", "⚡"),
    (":fire:", "🔥"),
    (":bug:", "🐛"),
    (":lock:", "🔒"),
    (":racehorse:", "🐎"),
    (":lipstick:", "💄"),
    (":globe_with_meridians:", "🌐"),
    (":rewind:", "⏪"),
    (":recycle:", "\u{267B}\u{FE0F}"),
    (":package:", "📦"),
    (":open_book:", "📖"),
    (":white_check_mark:", "✅"),
    (":construction_worker:", "👷"),
    (":green_heart:", "💚"),
    (":wrench:", "🔧"),
    (":bookmark:", "🔖"),
    (":tada:", "🎉"),
    (":grey_question:", "❔"),
    (":raised_hands:", "🙌"),
    (":exclamation:", "\u{2757}\u{FE0F}"),
];

/// Looks up the glyph for a `:shortcode:`.
pub fn glyph_for(shortcode: &str) -> Option<&'static str> {
    EMOJI
        .iter()
        .find(|(code, _)| *code == shortcode)
        .map(|(_, glyph)| *glyph)
}

/// Looks up the `:shortcode:` for a glyph.
///
/// The trailing variation selector (U+FE0F) is optional on both sides, so
/// `♻` and `♻️` resolve to the same shortcode.
pub fn shortcode_for(glyph: &str) -> Option<&'static str> {
    let wanted = strip_variation(glyph);
    EMOJI
        .iter()
        .find(|(_, g)| strip_variation(g) == wanted)
        .map(|(code, _)| *code)
}

/// Converts a shortcode to its glyph, or [`FALLBACK_GLYPH`] when unknown.
pub fn emojify(shortcode: &str) -> &'static str {
    glyph_for(shortcode).unwrap_or(FALLBACK_GLYPH)
}

/// Returns true when `token` is shaped like `:name:`.
pub fn is_shortcode(token: &str) -> bool {
    token.len() > 2
        && token.starts_with(':')
        && token.ends_with(':')
        && token[1..token.len() - 1]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '+')
}

fn punctuation_regex() -> Option<&'static Regex> {
    static PUNCTUATION: OnceLock<Option<Regex>> = OnceLock::new();
    PUNCTUATION.get_or_init(|| Regex::new(r"\p{P}").ok()).as_ref()
}

/// Returns true when `token` reads as a literal emoji glyph: at least one
/// character, none of them alphanumeric, punctuation (any Unicode `P*`
/// category) or whitespace.
pub fn is_glyph(token: &str) -> bool {
    let punctuated = punctuation_regex()
        .map(|re| re.is_match(token))
        .unwrap_or(false);

    !token.is_empty()
        && !punctuated
        && token
            .chars()
            .all(|c| !c.is_alphanumeric() && !c.is_ascii_punctuation() && !c.is_whitespace())
}

fn strip_variation(glyph: &str) -> &str {
    glyph.trim_end_matches('\u{FE0F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_for_known_shortcode() {
        assert_eq!(glyph_for(":sparkles:"), Some("✨"));
        assert_eq!(glyph_for(":open_book:"), Some("📖"));
    }

    #[test]
    fn test_glyph_for_unknown_shortcode() {
        assert_eq!(glyph_for(":unicorn_rainbow:"), None);
        assert_eq!(emojify(":unicorn_rainbow:"), FALLBACK_GLYPH);
    }

    #[test]
    fn test_shortcode_for_ignores_variation_selector() {
        assert_eq!(shortcode_for("\u{267B}"), Some(":recycle:"));
        assert_eq!(shortcode_for("\u{267B}\u{FE0F}"), Some(":recycle:"));
        assert_eq!(shortcode_for("🐛"), Some(":bug:"));
    }

    #[test]
    fn test_is_shortcode() {
        assert!(is_shortcode(":bug:"));
        assert!(is_shortcode(":white_check_mark:"));
        assert!(!is_shortcode("::"));
        assert!(!is_shortcode(":bug"));
        assert!(!is_shortcode(":two words:"));
    }

    #[test]
    fn test_is_glyph() {
        assert!(is_glyph("🐛"));
        assert!(is_glyph("\u{267B}\u{FE0F}"));
        assert!(is_glyph("👷\u{200D}\u{2640}\u{FE0F}"));
        assert!(!is_glyph("fix"));
        assert!(!is_glyph(":bug:"));
        assert!(!is_glyph(""));
    }

    #[test]
    fn test_is_glyph_rejects_unicode_punctuation() {
        for token in ["\u{2014}", "\u{00AB}", "\u{00BB}", "\u{2026}", "\u{00BF}", "\u{3001}"] {
            assert!(!is_glyph(token), "{:?} should not be a glyph", token);
        }
    }

    #[test]
    fn test_every_table_glyph_is_a_glyph() {
        for (code, glyph) in EMOJI {
            assert!(is_glyph(glyph), "glyph for {} rejected", code);
        }
    }
}
