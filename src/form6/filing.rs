use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{FilingError, Result};

pub const FILING_EXTENSION: &str = "xbrl";
pub const RSS_FEED_ARTIFACT: &str = "rssfeed";

// `<Name>_form6_Q<n>_<year>.<ext>`
static FORM6_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_form6_Q\d+_\d+\.[A-Za-z0-9]+$").expect("valid suffix regex"));

/// One filing document in the filings directory.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Filing {
    /// The filename, used as the filing identifier
    pub id: String,
    pub company: String,
    pub file: PathBuf,
}

impl Filing {
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let id = path.file_name()?.to_str()?.to_string();
        Some(Self {
            company: company_name(&id),
            id,
            file: path,
        })
    }
}

/// Display name for a filing: the Form 6 suffix is stripped, underscores
/// become spaces and commas are dropped.
pub fn company_name(file_name: &str) -> String {
    FORM6_SUFFIX
        .replace(file_name, "")
        .replace('_', " ")
        .replace(',', "")
}

fn is_filing(file_name: &str) -> bool {
    file_name != RSS_FEED_ARTIFACT
        && Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext == FILING_EXTENSION)
}

/// The configured source directory of Form 6 filings.
#[derive(Clone, Debug)]
pub struct FilingDirectory {
    root: PathBuf,
}

impl FilingDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every filing in the directory, in directory-listing order.
    ///
    /// A missing or unreadable directory is logged and yields no filings.
    pub fn list(&self) -> Vec<Filing> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Filings directory {:?} not readable: {}", self.root, e);
                return Vec::new();
            }
        };

        let filings: Vec<Filing> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
            .filter(|entry| entry.file_name().to_str().is_some_and(is_filing))
            .filter_map(|entry| Filing::from_path(self.absolute(entry.path())))
            .collect();

        debug!("Found {} filings in {:?}", filings.len(), self.root);
        filings
    }

    /// Filings whose company name contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<Filing> {
        let needle = term.to_lowercase();
        self.list()
            .into_iter()
            .filter(|filing| filing.company.to_lowercase().contains(&needle))
            .collect()
    }

    /// Path of the filing named `id`.
    ///
    /// Identifiers must be bare file names inside the directory.
    pub fn path_for(&self, id: &str) -> Result<PathBuf> {
        let is_bare_name = !id.is_empty()
            && id != "."
            && id != ".."
            && !id.contains('/')
            && !id.contains('\\');
        if !is_bare_name {
            return Err(FilingError::NotFound(id.to_string()));
        }

        let path = self.root.join(id);
        if path.is_file() {
            Ok(self.absolute(path))
        } else {
            Err(FilingError::NotFound(id.to_string()))
        }
    }

    fn absolute(&self, path: PathBuf) -> PathBuf {
        std::path::absolute(&path).unwrap_or(path)
    }
}
