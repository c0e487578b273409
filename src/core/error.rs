use std::path::PathBuf;
use thiserror::Error;

/// Result type for filing operations.
pub type Result<T> = std::result::Result<T, FilingError>;

/// Errors surfaced to callers of the extraction API.
///
/// Malformed documents are not errors: extraction returns `None` for them.
#[derive(Debug, Error)]
pub enum FilingError {
    /// The identifier does not name a file in the filings directory
    #[error("Filing not found: {0}")]
    NotFound(String),

    /// The filing exists but could not be read
    #[error("Failed to read filing {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FilingError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FilingError::NotFound(_))
    }
}

/// Errors from the valuation calculator.
#[derive(Debug, Error, PartialEq)]
pub enum ValuationError {
    #[error("Discount rate {discount}% must exceed terminal growth {terminal_growth}%")]
    DiscountBelowTerminalGrowth { discount: f64, terminal_growth: f64 },

    #[error("Approach weights must sum to a positive value")]
    ZeroWeights,

    #[error(
        "Projection of {0} years exceeds the {max} year limit",
        max = crate::valuation::MAX_PROJECTION_YEARS
    )]
    ProjectionTooLong(u32),
}
