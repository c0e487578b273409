pub mod details;
pub mod extract;
pub mod filing;
pub mod parsing;
pub mod summary;
pub mod taxonomy;

pub use details::{DetailReport, MileageSource, MileageTotals, Pipeline, PipelineSegment};
pub use extract::Extractor;
pub use filing::{company_name, Filing, FilingDirectory};
pub use summary::FinancialSummary;
