use regex::Regex;
use std::sync::LazyLock;

use crate::extraction::text::ResumeText;

/// Currency symbol or code, an amount with Western (`1,200,000`) or Indian
/// (`12,00,000`) grouping, and an optional period suffix.
static SALARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:[$€£₹]|\b(?:usd|eur|gbp|inr|cad|aud|rs)\b\.?)\s?(\d{1,3}(?:,\d{2,3})+|\d+)(?:\s*(?:k\b|lpa\b|per\s+(?:year|annum|month)|/\s*(?:yr|year|annum)))?",
    )
    .unwrap()
});

/// Returns the digits of the largest salary-like figure in the text.
///
/// Resumes often list a historical figure next to the current one; the larger
/// one is the better default. Ties keep the earlier mention.
pub fn extract_salary(text: &ResumeText) -> Option<String> {
    let mut best: Option<(u64, String)> = None;

    for caps in SALARY.captures_iter(text.raw()) {
        let digits: String = caps[0].chars().filter(char::is_ascii_digit).collect();
        let Ok(value) = digits.parse::<u64>() else {
            continue;
        };
        if best.as_ref().map_or(true, |(max, _)| value > *max) {
            best = Some((value, digits));
        }
    }

    best.map(|(_, digits)| digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salary(raw: &str) -> Option<String> {
        extract_salary(&ResumeText::new(raw))
    }

    #[test]
    fn test_largest_figure_wins() {
        assert_eq!(
            salary("Previous: $85,000 per year. Current: $120,000 per year.").as_deref(),
            Some("120000")
        );
    }

    #[test]
    fn test_order_does_not_matter() {
        assert_eq!(
            salary("Now $120,000; started at $85,000").as_deref(),
            Some("120000")
        );
    }

    #[test]
    fn test_indian_grouping_and_lpa() {
        assert_eq!(salary("CTC: ₹12,00,000").as_deref(), Some("1200000"));
        assert_eq!(salary("Expected INR 18 LPA").as_deref(), Some("18"));
        assert_eq!(salary("Rs. 45000 per month").as_deref(), Some("45000"));
    }

    #[test]
    fn test_currency_codes_and_k_suffix() {
        assert_eq!(salary("Target: USD 95k").as_deref(), Some("95"));
        assert_eq!(salary("£60,000 / year").as_deref(), Some("60000"));
    }

    #[test]
    fn test_no_currency_no_salary() {
        assert_eq!(salary("Managed a team of 12 across 3 offices"), None);
        assert_eq!(salary("Reduced spend by 40%"), None);
    }

    #[test]
    fn test_currency_code_needs_word_boundary() {
        // "rs" inside "years" is not a currency marker
        assert_eq!(salary("5 years 2000 projects"), None);
    }
}
