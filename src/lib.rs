pub mod core;
pub mod form6;
pub mod valuation;

// Re-exports
pub use core::config::ExtractorConfig;
pub use core::error::{FilingError, ValuationError};
pub use form6::{DetailReport, Extractor, Filing, FinancialSummary};
