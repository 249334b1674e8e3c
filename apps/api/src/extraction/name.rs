use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::text::ResumeText;

/// `Jane`, `Jane.`, `J` or `J.`
static NAME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z][a-z]+\.?|[A-Z]\.?)$").unwrap());

const HEADER_LINES: usize = 8;

/// Picks the candidate's name from the resume header.
///
/// Only the first 8 non-empty lines are considered and the first acceptable
/// one wins.
pub fn extract_name(text: &ResumeText) -> Option<String> {
    text.lines()
        .take(HEADER_LINES)
        .find(|line| is_name_line(line))
        .map(str::to_string)
}

fn is_name_line(line: &str) -> bool {
    let len = line.chars().count();
    if !(3..=50).contains(&len) {
        return false;
    }

    let lower = line.to_lowercase();
    if line.contains(['@', '+', '.', ','])
        || lower.contains("http")
        || line.chars().any(|c| c.is_ascii_digit())
    {
        return false;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    (2..=4).contains(&tokens.len()) && tokens.iter().all(|t| NAME_TOKEN.is_match(t))
}
