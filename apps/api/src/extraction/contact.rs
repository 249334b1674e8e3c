//! Contact passes: email, phone with dialing code, LinkedIn profile URL.

use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::text::ResumeText;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Tried in order; the first pattern with any match decides the phone field.
/// Separators are limited to space, tab, dot and dash so a number never
/// continues onto the next line.
static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // +<country> followed by 2-4 digit groups: "+91 98765 43210", "+1 555-123-4567"
        Regex::new(r"\+\d{1,3}[ \t.-]?\(?\d{2,5}\)?(?:[ \t.-]?\d{2,5}){1,3}").unwrap(),
        // Bare 10-digit run: "9876543210"
        Regex::new(r"\b\d{10}\b").unwrap(),
        // NANP: "(415) 555-0100", "415.555.0100"
        Regex::new(r"\(?\d{3}\)?[ \t.-]?\d{3}[ \t.-]?\d{4}").unwrap(),
    ]
});

static LINKEDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[A-Za-z0-9_-]+/?").unwrap()
});

/// Dialing code fallback when the digits give no better hint.
pub const DEFAULT_COUNTRY_CODE: &str = "+1";

/// A phone number normalised to its last 10 digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    pub number: String,
    pub country_code: String,
}

pub fn extract_email(text: &ResumeText) -> Option<String> {
    EMAIL.find(text.raw()).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &ResumeText) -> Option<PhoneNumber> {
    let matched = PHONE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text.raw()))?;
    let digits: String = matched
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    normalize_phone(&digits)
}

/// Infers the dialing code from digit count and prefix, then keeps the last
/// 10 digits. The check order (+91, +1, +44, +61) is fixed and content-blind:
/// an 11-digit non-NANP number starting with `1` is still reported as `+1`.
pub fn normalize_phone(digits: &str) -> Option<PhoneNumber> {
    let len = digits.len();
    let (country_code, local) = if digits.starts_with("91") && len == 12 {
        ("+91", &digits[2..])
    } else if digits.starts_with('1') && len == 11 {
        ("+1", digits)
    } else if digits.starts_with("44") && len >= 12 {
        ("+44", digits)
    } else if digits.starts_with("61") && len >= 11 {
        ("+61", digits)
    } else {
        (DEFAULT_COUNTRY_CODE, digits)
    };

    if local.len() < 10 {
        return None;
    }

    Some(PhoneNumber {
        number: local[local.len() - 10..].to_string(),
        country_code: country_code.to_string(),
    })
}

pub fn extract_linkedin(text: &ResumeText) -> Option<String> {
    let url = LINKEDIN.find(text.raw())?.as_str();
    let has_scheme = url.to_ascii_lowercase().starts_with("http");
    Some(if has_scheme {
        url.to_string()
    } else {
        format!("https://{url}")
    })
}
