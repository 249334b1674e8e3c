//! Career passes: job title, experience lines, skills, education lines.

use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::text::{
    capitalize_first, chars_after, clean_fragment, KeywordTable, ResumeText,
};
use crate::extraction::vocab::{
    EDUCATION_INDICATORS, EXPERIENCE_HEADERS, ROLE_KEYWORDS, SKILLS, TITLE_AT_KEYWORDS,
};

static EXPERIENCE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)experience").unwrap());

/// Explicit title phrasings, tried in order.
static TITLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)\bcurrent(?:\s+(?:role|position|title|designation))?\s*:\s*([^\n]+)")
            .unwrap(),
        Regex::new(r"(?i)\bposition\s*:\s*([^\n]+)").unwrap(),
        Regex::new(r"(?i)\brole\s*:\s*([^\n]+)").unwrap(),
        Regex::new(r"(?i)\bworking\s+as\s+(?:an?\s+)?([^\n,.;]+)").unwrap(),
        Regex::new(&format!(
            r"(?im)^[ \t]*([^\n]*\b(?:{})\b[^\n]*?)[ \t]+at[ \t]+\S",
            TITLE_AT_KEYWORDS.join("|")
        ))
        .unwrap(),
    ]
});

static EXPERIENCE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?i){}", EXPERIENCE_HEADERS.join("|"))).unwrap());

/// Case-sensitive, so "Corporation" and "Incorporated" count but "including" does not.
static COMPANY_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Ltd|Inc|Corp|Company|\bat ").unwrap());

static YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

static SKILLS_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)skills").unwrap());
static SKILL_TABLE: LazyLock<KeywordTable> = LazyLock::new(|| KeywordTable::new(SKILLS));

static EDUCATION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)education").unwrap());
static EDUCATION_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("(?i){}", EDUCATION_INDICATORS.join("|"))).unwrap());

const CONTACT_MARKERS: &[&str] = &["@", "http", "www", "linkedin"];

/// A dialing prefix such as `+91`. A bare `+` is allowed ("C++ Developer").
static DIAL_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+\s?\d").unwrap());
const SECTION_WORDS: &[&str] = &["experience", "skills", "education", "university"];

const TITLE_FALLBACK_LINES: usize = 20;
const EXPERIENCE_LINES: usize = 9;
const EDUCATION_LINES: usize = 4;
const SKILLS_WINDOW_CHARS: usize = 1000;
const EDUCATION_WINDOW_CHARS: usize = 500;

/// Best guess at the current or most recent role.
pub fn extract_job_title(text: &ResumeText) -> Option<String> {
    let raw = text.raw();
    let section = EXPERIENCE_WORD.find(raw).map_or(raw, |m| &raw[m.end()..]);

    TITLE_PATTERNS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(section))
        .map(|caps| clean_fragment(&caps[1]))
        .find(|candidate| is_plausible_title(candidate))
        .or_else(|| title_from_header(text))
}

fn is_plausible_title(candidate: &str) -> bool {
    let len = candidate.chars().count();
    let lower = candidate.to_lowercase();
    len > 3 && len < 80 && !lower.contains("experience") && !lower.contains("skills")
}

/// Fallback: the first header line that reads like a role.
fn title_from_header(text: &ResumeText) -> Option<String> {
    text.lines()
        .take(TITLE_FALLBACK_LINES)
        .map(clean_fragment)
        .find(|line| {
            let lower = line.to_lowercase();
            let len = line.chars().count();
            len > 3
                && len < 80
                && ROLE_KEYWORDS.iter().any(|k| lower.contains(k))
                && !CONTACT_MARKERS.iter().any(|m| lower.contains(m))
                && !DIAL_PREFIX.is_match(&lower)
                && !SECTION_WORDS.iter().any(|w| lower.contains(w))
        })
}

/// Employment history lines following the first experience-style header.
pub fn extract_experience(text: &ResumeText) -> Vec<String> {
    let raw = text.raw();
    let Some(header) = EXPERIENCE_HEADER.find(raw) else {
        return Vec::new();
    };

    raw[header.end()..]
        .lines()
        .skip(1)
        .take(EXPERIENCE_LINES)
        .map(str::trim)
        .filter(|line| {
            (20..=200).contains(&line.chars().count())
                && (COMPANY_MARKER.is_match(line) || YEAR.is_match(line))
        })
        .map(str::to_string)
        .collect()
}

/// Vocabulary hits in the 1000 characters after "skills", in vocabulary order.
pub fn extract_skills(text: &ResumeText) -> Vec<String> {
    let raw = text.raw();
    let Some(header) = SKILLS_HEADER.find(raw) else {
        return Vec::new();
    };
    let window = chars_after(raw, header.end(), SKILLS_WINDOW_CHARS).to_lowercase();

    SKILL_TABLE
        .iter()
        .filter(|(_, pattern)| pattern.is_match(&window))
        .map(|(term, _)| capitalize_first(term))
        .collect()
}

/// Up to four degree or institution lines after "education".
pub fn extract_education(text: &ResumeText) -> Vec<String> {
    let raw = text.raw();
    let Some(header) = EDUCATION_HEADER.find(raw) else {
        return Vec::new();
    };

    chars_after(raw, header.end(), EDUCATION_WINDOW_CHARS)
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| {
            (10..=200).contains(&line.chars().count())
                && (EDUCATION_MARKER.is_match(line) || YEAR.is_match(line))
        })
        .take(EDUCATION_LINES)
        .map(str::to_string)
        .collect()
}
