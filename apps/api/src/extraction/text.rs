//! Shared input for the pattern passes, plus the small string helpers they
//! all lean on.

use regex::Regex;

/// Acquired resume text with a lowercased copy computed once per document.
///
/// Passes that report keyword-table terms search `lower`; passes that report
/// literal source spans search `raw`.
#[derive(Debug)]
pub struct ResumeText<'a> {
    raw: &'a str,
    lower: String,
}

impl<'a> ResumeText<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Trimmed, non-empty lines of the raw text in document order.
    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.raw.lines().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// A vocabulary compiled into whole-word matchers, kept in table order.
pub struct KeywordTable {
    entries: Vec<(&'static str, Regex)>,
}

impl KeywordTable {
    pub fn new(terms: &[&'static str]) -> Self {
        Self {
            entries: terms.iter().map(|&t| (t, word_regex(t))).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, Regex)> {
        self.entries.iter()
    }
}

/// Builds a matcher for a lowercase term. Word boundaries are only asserted
/// on alphanumeric ends, so `c++` and `.net` still match; inner spaces accept
/// any whitespace run.
pub fn word_regex(term: &str) -> Regex {
    let body = regex::escape(term).replace(' ', r"\s+");
    let lead = if term.starts_with(char::is_alphanumeric) {
        r"\b"
    } else {
        ""
    };
    let trail = if term.ends_with(char::is_alphanumeric) {
        r"\b"
    } else {
        ""
    };
    Regex::new(&format!("{lead}{body}{trail}")).expect("escaped keyword is a valid pattern")
}

/// Up to `n` characters immediately before byte offset `idx`.
pub fn chars_before(s: &str, idx: usize, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    let start = s[..idx]
        .char_indices()
        .rev()
        .nth(n - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &s[start..idx]
}

/// Up to `n` characters starting at byte offset `idx`.
pub fn chars_after(s: &str, idx: usize, n: usize) -> &str {
    let rest = &s[idx..];
    let end = rest
        .char_indices()
        .nth(n)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    &rest[..end]
}

/// `new south wales` -> `New South Wales`.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collapses internal whitespace and strips separator punctuation from both ends.
pub fn clean_fragment(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| matches!(c, '|' | '-' | ',' | ';' | ':' | '.' | '•' | '*'))
        .trim()
        .to_string()
}
