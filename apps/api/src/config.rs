use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on text acquisition for one document.
    pub extraction_timeout: Duration,
    pub max_upload_bytes: usize,
    pub tesseract_bin: String,
    pub ocr_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            extraction_timeout: Duration::from_secs(parse_env("EXTRACTION_TIMEOUT_SECS", 30)?),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            tesseract_bin: std::env::var("TESSERACT_BIN")
                .unwrap_or_else(|_| "tesseract".to_string()),
            ocr_language: std::env::var("OCR_LANGUAGE").unwrap_or_else(|_| "eng".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            extraction_timeout: Duration::from_secs(30),
            max_upload_bytes: 10 * 1024 * 1024,
            tesseract_bin: "tesseract".to_string(),
            ocr_language: "eng".to_string(),
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let value: u64 = parse_env("APPLYFIRST_TEST_UNSET_VAR", 30).unwrap();
        assert_eq!(value, 30);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("APPLYFIRST_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("APPLYFIRST_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("APPLYFIRST_TEST_BAD_PORT"));
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("APPLYFIRST_TEST_TIMEOUT", " 45 ");
        let value: u64 = parse_env("APPLYFIRST_TEST_TIMEOUT", 30).unwrap();
        assert_eq!(value, 45);
    }
}
