use anyhow::{anyhow, Result};
use std::path::PathBuf;

pub const DEFAULT_FILINGS_DIR: &str = "Ferc Current data xlbr";
pub const DEFAULT_FILING_YEAR: i32 = 2024;
pub const DEFAULT_PRIMARY_CONTEXT: &str = "C1";
pub const DEFAULT_SECONDARY_CONTEXT: &str = "C2";
pub const DEFAULT_CURRENT_MARKER: &str = "Current";

#[derive(Clone, Debug)]
pub struct ExtractorConfig {
    pub filings_dir: PathBuf,
    pub filing_year: i32,
    pub primary_context: String,
    pub secondary_context: String,
    pub current_marker: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            filings_dir: PathBuf::from(DEFAULT_FILINGS_DIR),
            filing_year: DEFAULT_FILING_YEAR,
            primary_context: DEFAULT_PRIMARY_CONTEXT.to_string(),
            secondary_context: DEFAULT_SECONDARY_CONTEXT.to_string(),
            current_marker: DEFAULT_CURRENT_MARKER.to_string(),
        }
    }
}

impl ExtractorConfig {
    pub fn from_env() -> Result<Self> {
        let filings_dir = PathBuf::from(
            std::env::var("FORM6_FILINGS_DIR").unwrap_or_else(|_| DEFAULT_FILINGS_DIR.to_string()),
        );

        let filing_year = match std::env::var("FORM6_FILING_YEAR") {
            Ok(raw) => raw
                .trim()
                .parse::<i32>()
                .map_err(|_| anyhow!("FORM6_FILING_YEAR is not a valid year: {}", raw))?,
            Err(_) => DEFAULT_FILING_YEAR,
        };

        let primary_context = std::env::var("FORM6_PRIMARY_CONTEXT")
            .unwrap_or_else(|_| DEFAULT_PRIMARY_CONTEXT.to_string());
        let secondary_context = std::env::var("FORM6_SECONDARY_CONTEXT")
            .unwrap_or_else(|_| DEFAULT_SECONDARY_CONTEXT.to_string());
        let current_marker = std::env::var("FORM6_CURRENT_MARKER")
            .unwrap_or_else(|_| DEFAULT_CURRENT_MARKER.to_string());

        if current_marker.is_empty() {
            return Err(anyhow!("FORM6_CURRENT_MARKER cannot be empty"));
        }

        Ok(Self {
            filings_dir,
            filing_year,
            primary_context,
            secondary_context,
            current_marker,
        })
    }

    pub fn with_filings_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.filings_dir = dir.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.filings_dir, PathBuf::from("Ferc Current data xlbr"));
        assert_eq!(config.filing_year, 2024);
        assert_eq!(config.primary_context, "C1");
        assert_eq!(config.secondary_context, "C2");
        assert_eq!(config.current_marker, "Current");
    }

    #[test]
    fn test_with_filings_dir() {
        let config = ExtractorConfig::default().with_filings_dir("/tmp/filings");
        assert_eq!(config.filings_dir, PathBuf::from("/tmp/filings"));
    }
}
