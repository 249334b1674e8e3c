//! Location passes. Each searches the lowercased text against a curated
//! vocabulary and stops at the first accepted term.

use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::text::{chars_after, chars_before, title_case, KeywordTable, ResumeText};
use crate::extraction::vocab::{CITIES, COUNTRIES, COUNTRY_ALIASES, LOCATION_INDICATORS, STATES};

static CITY_TABLE: LazyLock<KeywordTable> = LazyLock::new(|| KeywordTable::new(CITIES));
static STATE_TABLE: LazyLock<KeywordTable> = LazyLock::new(|| KeywordTable::new(STATES));
static COUNTRY_TABLE: LazyLock<KeywordTable> = LazyLock::new(|| KeywordTable::new(COUNTRIES));

static LOCATION_INDICATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:{})", LOCATION_INDICATORS.join("|"))).unwrap()
});

/// A city directly followed by `,`, `state` or `country` reads as an address.
static CITY_TRAILER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:,|state\b|country\b)").unwrap());

static ZIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{5,6}(?:-\d{4})?\b").unwrap());

const CITY_CONTEXT_CHARS: usize = 50;
const ZIP_CONTEXT_CHARS: usize = 100;

/// City names double as ordinary words ("Reading", "Phoenix", "Paris" in a
/// book title), so a match only counts inside location context.
pub fn extract_city(text: &ResumeText) -> Option<String> {
    let lower = text.lower();
    CITY_TABLE.iter().find_map(|(term, pattern)| {
        pattern
            .find_iter(lower)
            .any(|m| city_in_context(lower, m.start(), m.end()))
            .then(|| title_case(term))
    })
}

fn city_in_context(lower: &str, start: usize, end: usize) -> bool {
    LOCATION_INDICATOR.is_match(chars_before(lower, start, CITY_CONTEXT_CHARS))
        || LOCATION_INDICATOR.is_match(chars_after(lower, end, CITY_CONTEXT_CHARS))
        || CITY_TRAILER.is_match(&lower[end..])
}

pub fn extract_state(text: &ResumeText) -> Option<String> {
    first_term(&STATE_TABLE, text).map(title_case)
}

pub fn extract_country(text: &ResumeText) -> Option<String> {
    first_term(&COUNTRY_TABLE, text).map(normalize_country)
}

fn first_term(table: &KeywordTable, text: &ResumeText) -> Option<&'static str> {
    table
        .iter()
        .find(|(_, pattern)| pattern.is_match(text.lower()))
        .map(|(term, _)| *term)
}

fn normalize_country(term: &str) -> String {
    COUNTRY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == term)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| title_case(term))
}

/// Five or six digits, optionally `-####`. Bare numbers are ambiguous (years,
/// phone fragments, ids), so a candidate needs address-like context before
/// it or an already detected city.
pub fn extract_zip_code(text: &ResumeText, city_found: bool) -> Option<String> {
    let lower = text.lower();
    ZIP.find_iter(lower)
        .find(|m| zip_in_context(lower, m.start(), city_found))
        .map(|m| m.as_str().to_string())
}

fn zip_in_context(lower: &str, start: usize, city_found: bool) -> bool {
    let before = chars_before(lower, start, ZIP_CONTEXT_CHARS);

    // Continuation of a digit run such as "+91 98765 43210".
    if before
        .trim_end()
        .ends_with(|c: char| c.is_ascii_digit() || c == '+')
    {
        return false;
    }

    city_found || before.contains("address") || before.contains("location") || before.contains(',')
}
