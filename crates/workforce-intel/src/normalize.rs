//! Tokenization of delimiter-separated multi-value text (skills, technologies, topic areas).
//!
//! Matching is always token-for-token: `"SQL"` matches `"Python; SQL"` but never
//! `"NoSQL"` or `"PostgreSQL-admin"`.

use serde::Serialize;
use std::collections::BTreeSet;

/// Separators accepted between tokens of a multi-value field.
pub const DELIMITERS: [char; 2] = [';', ','];

/// A single token, keeping the source casing for display next to its comparison key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub display: String,
    pub key: String,
}

/// A multi-value field tokenized once at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MultiValue {
    pub raw: String,
    #[serde(skip)]
    tokens: Vec<Token>,
}

impl MultiValue {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.trim().to_string(),
            tokens: tokenize(raw),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn contains(&self, query_token: &str) -> bool {
        let wanted = normalize_key(query_token);
        !wanted.is_empty() && self.tokens.iter().any(|token| token.key == wanted)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Split `raw` into ordered, de-duplicated tokens.
pub fn tokenize(raw: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for piece in raw.split(DELIMITERS) {
        let display = clean(piece);
        if display.is_empty() {
            continue;
        }
        let key = display.to_lowercase();
        if tokens.iter().any(|existing| existing.key == key) {
            continue;
        }
        tokens.push(Token { display, key });
    }
    tokens
}

/// True iff `query_token` equals one of the tokens of `raw`, ignoring case and spacing.
pub fn matches(raw: &str, query_token: &str) -> bool {
    let wanted = normalize_key(query_token);
    if wanted.is_empty() {
        return false;
    }
    tokenize(raw).iter().any(|token| token.key == wanted)
}

/// Distinct non-empty values in sorted order, joined with `"; "`.
pub(crate) fn join_sorted(values: BTreeSet<&str>) -> String {
    values
        .into_iter()
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Comparison key for a free-text value: cleaned and lower-cased.
pub fn normalize_key(value: &str) -> String {
    clean(value).to_lowercase()
}

/// Case- and whitespace-insensitive equality for single-valued columns.
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    normalize_key(left) == normalize_key(right)
}

/// Case-insensitive containment used for free-text columns such as job titles.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    let needle = normalize_key(needle);
    needle.is_empty() || normalize_key(haystack).contains(&needle)
}

fn clean(value: &str) -> String {
    let stripped = value.replace(['\u{feff}', '\u{200b}'], "");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_tokens_only() {
        assert!(matches("Python, SQL", "sql"));
        assert!(matches("Python; SQL", "  SQL "));
        assert!(!matches("Python, SQL", "No SQL"));
        assert!(!matches("NoSQL; PostgreSQL-admin", "SQL"));
        assert!(!matches("Python, SQL", ""));
    }

    #[test]
    fn tokenize_preserves_display_casing_and_drops_duplicates() {
        let tokens = tokenize("\u{feff}Computer  Vision; python;;PYTHON , OpenCV ");
        let display: Vec<_> = tokens.iter().map(|token| token.display.as_str()).collect();
        assert_eq!(display, vec!["Computer Vision", "python", "OpenCV"]);
        assert_eq!(tokens[0].key, "computer vision");
    }

    #[test]
    fn join_sorted_skips_blanks() {
        let values: BTreeSet<&str> = ["Dallas", "", "Austin"].into_iter().collect();
        assert_eq!(join_sorted(values), "Austin; Dallas");
        assert_eq!(join_sorted(BTreeSet::new()), "");
    }

    #[test]
    fn multi_value_contains_uses_cached_tokens() {
        let skills = MultiValue::parse("Python; OpenCV");
        assert!(skills.contains("opencv"));
        assert!(!skills.contains("Open"));
        assert_eq!(skills.raw, "Python; OpenCV");
        assert!(MultiValue::parse(" ; ").is_empty());
    }

    #[test]
    fn free_text_helpers_ignore_case_and_spacing() {
        assert!(eq_ignore_case("Law  Enforcement", "law enforcement"));
        assert!(!eq_ignore_case("Law Enforcement", "Law"));
        assert!(contains_ignore_case("Senior CV Engineer", "cv eng"));
        assert!(!contains_ignore_case("Project Manager", "engineer"));
    }
}
