pub mod context;
pub mod resolve;
pub mod xml;

#[cfg(test)]
pub(crate) mod tests;

pub use context::{ContextPredicate, CurrentPeriod};
pub use resolve::{parse_number, ResolvedText, ResolvedValue, Resolver};
pub use xml::{DocumentError, FactItem, FilingDocument};
