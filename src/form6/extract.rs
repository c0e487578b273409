use log::{error, info};
use std::path::Path;

use super::details::DetailReport;
use super::filing::{company_name, Filing, FilingDirectory};
use super::parsing::{ContextPredicate, CurrentPeriod, FilingDocument};
use super::summary::FinancialSummary;
use crate::core::config::ExtractorConfig;
use crate::core::error::{FilingError, Result};

/// Entry point for collaborators: enumerate, search and extract filings.
///
/// Holds no per-filing state. Every extraction re-reads and re-parses the
/// document, so concurrent calls never share anything.
pub struct Extractor<P: ContextPredicate = CurrentPeriod> {
    directory: FilingDirectory,
    predicate: P,
    report_year: i32,
}

impl Extractor<CurrentPeriod> {
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::with_predicate(config, CurrentPeriod::from_config(config))
    }
}

impl<P: ContextPredicate> Extractor<P> {
    pub fn with_predicate(config: &ExtractorConfig, predicate: P) -> Self {
        Self {
            directory: FilingDirectory::new(config.filings_dir.clone()),
            predicate,
            report_year: config.filing_year,
        }
    }

    pub fn directory(&self) -> &FilingDirectory {
        &self.directory
    }

    pub fn list(&self) -> Vec<Filing> {
        self.directory.list()
    }

    pub fn search(&self, term: &str) -> Vec<Filing> {
        let results = self.directory.search(term);
        info!("Found {} filings matching {:?}", results.len(), term);
        results
    }

    /// Financial summary of filing `id`; `Ok(None)` when the document is unusable.
    pub async fn summary(&self, id: &str) -> Result<Option<FinancialSummary>> {
        let Some(document) = self.load(id).await? else {
            return Ok(None);
        };
        Ok(Some(FinancialSummary::extract(
            &document,
            &self.predicate,
            &company_name(id),
            id,
            self.report_year,
        )))
    }

    /// Detail report of filing `id`; `Ok(None)` when the document is unusable.
    pub async fn details(&self, id: &str) -> Result<Option<DetailReport>> {
        let Some(document) = self.load(id).await? else {
            return Ok(None);
        };
        Ok(Some(DetailReport::extract(
            &document,
            &self.predicate,
            &company_name(id),
            id,
        )))
    }

    async fn load(&self, id: &str) -> Result<Option<FilingDocument>> {
        let path = self.directory.path_for(id)?;
        let content = read_filing(&path).await?;

        match FilingDocument::parse(&content) {
            Ok(document) => {
                info!("Parsed {} facts from {}", document.len(), id);
                Ok(Some(document))
            }
            Err(e) => {
                error!("Unusable filing {}: {}", id, e);
                Ok(None)
            }
        }
    }
}

async fn read_filing(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => FilingError::NotFound(path.display().to_string()),
            _ => FilingError::Read {
                path: path.to_path_buf(),
                source,
            },
        })?;
    // non-UTF-8 bytes become U+FFFD
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_missing_filing() {
        let dir = tempdir().unwrap();
        let err = read_filing(&dir.path().join("Gone_form6_Q4_2024.xbrl"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_read_failure_is_not_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Folder_Co_form6_Q4_2024.xbrl");
        std::fs::create_dir(&path).unwrap();

        let err = read_filing(&path).await.unwrap_err();
        assert!(!err.is_not_found());
        match err {
            FilingError::Read { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_read_invalid_utf8() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("Latin_Co_form6_Q4_2024.xbrl");
        std::fs::write(&path, b"<xbrl>Caf\xe9</xbrl>").unwrap();

        let content = read_filing(&path).await.unwrap();
        assert_eq!(content, "<xbrl>Caf\u{FFFD}</xbrl>");
    }
}
