use crate::core::config::ExtractorConfig;

/// Decides whether a context identifier refers to the current reporting period.
///
/// Context identifiers are treated as opaque strings; implementations match on
/// naming conventions instead of resolving the context's period definition.
pub trait ContextPredicate {
    fn is_current(&self, context_ref: &str) -> bool;
}

impl<F> ContextPredicate for F
where
    F: Fn(&str) -> bool,
{
    fn is_current(&self, context_ref: &str) -> bool {
        self(context_ref)
    }
}

/// The Form 6 vendor convention: `C1`/`C2` name the current-period contexts,
/// other current contexts carry a `Current` marker or the filing year.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentPeriod {
    primary: String,
    secondary: String,
    marker: String,
    year: String,
}

impl CurrentPeriod {
    pub fn new(
        primary: impl Into<String>,
        secondary: impl Into<String>,
        marker: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
            marker: marker.into(),
            year: year.to_string(),
        }
    }

    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(
            config.primary_context.as_str(),
            config.secondary_context.as_str(),
            config.current_marker.as_str(),
            config.filing_year,
        )
    }
}

impl Default for CurrentPeriod {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}

impl ContextPredicate for CurrentPeriod {
    fn is_current(&self, context_ref: &str) -> bool {
        context_ref == self.primary
            || context_ref == self.secondary
            || context_ref.contains(&self.marker)
            || context_ref.contains(&self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_period_tokens() {
        let predicate = CurrentPeriod::default();
        assert!(predicate.is_current("C1"));
        assert!(predicate.is_current("C2"));
        assert!(predicate.is_current("CurrentYearDuration"));
        assert!(predicate.is_current("FY2024_Consolidated"));

        assert!(!predicate.is_current("C10"));
        assert!(!predicate.is_current("c1"));
        assert!(!predicate.is_current("PriorYear_2023"));
        assert!(!predicate.is_current(""));
    }

    #[test]
    fn test_configured_year() {
        let predicate = CurrentPeriod::new("A", "B", "Now", 2025);
        assert!(predicate.is_current("Duration_2025"));
        assert!(!predicate.is_current("Duration_2024"));
        assert!(!predicate.is_current("C1"));
        assert!(predicate.is_current("B"));
    }

    #[test]
    fn test_closure_predicate() {
        let predicate = |ctx: &str| ctx.ends_with("_cur");
        assert!(predicate.is_current("seg1_cur"));
        assert!(!predicate.is_current("seg1_prev"));
    }
}
