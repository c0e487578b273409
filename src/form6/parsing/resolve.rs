use serde::{Deserialize, Serialize};

use super::context::ContextPredicate;
use super::xml::{FactItem, FilingDocument};

/// A non-zero numeric fact with the context and unit it was reported under.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResolvedValue {
    pub value: f64,
    pub context: String,
    pub unit: String,
}

/// A non-empty text fact with its context.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ResolvedText {
    pub value: String,
    pub context: String,
}

/// Converts fact text to a number. Blank, non-numeric and non-finite text is absent.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Resolves tag names of one document to scalar values.
pub struct Resolver<'a, P: ContextPredicate + ?Sized> {
    document: &'a FilingDocument,
    predicate: &'a P,
}

impl<'a, P: ContextPredicate + ?Sized> Resolver<'a, P> {
    pub fn new(document: &'a FilingDocument, predicate: &'a P) -> Self {
        Self {
            document,
            predicate,
        }
    }

    pub fn document(&self) -> &'a FilingDocument {
        self.document
    }

    /// Picks the fact for `tag` that best represents the current period.
    ///
    /// The first fact in a current context wins. Without one, the first fact in
    /// document order is used whatever its context.
    pub fn select(&self, tag: &str) -> Option<&'a FactItem> {
        let facts = self.document.facts(tag);
        facts
            .iter()
            .find(|fact| {
                fact.context_ref
                    .as_deref()
                    .is_some_and(|ctx| self.predicate.is_current(ctx))
            })
            .or_else(|| facts.first())
    }

    /// Numeric value of the selected fact, if it converts.
    pub fn value(&self, tag: &str) -> Option<f64> {
        self.select(tag).and_then(|fact| parse_number(&fact.value))
    }

    /// Like [`Resolver::value`] with absent mapped to zero.
    pub fn value_or_zero(&self, tag: &str) -> f64 {
        self.value(tag).unwrap_or(0.0)
    }

    /// Every convertible, non-zero value of `tag` in document order.
    pub fn values(&self, tag: &str) -> Vec<ResolvedValue> {
        self.document
            .facts(tag)
            .iter()
            .filter_map(|fact| {
                let value = parse_number(&fact.value)?;
                (value != 0.0).then(|| ResolvedValue {
                    value,
                    context: fact.context().to_string(),
                    unit: fact.unit_ref.clone().unwrap_or_default(),
                })
            })
            .collect()
    }

    /// Every non-empty text value of `tag` in document order. `"0"` counts as empty.
    pub fn text_values(&self, tag: &str) -> Vec<ResolvedText> {
        self.document
            .facts(tag)
            .iter()
            .filter_map(|fact| {
                let value = fact.value.trim();
                (!value.is_empty() && value != "0").then(|| ResolvedText {
                    value: value.to_string(),
                    context: fact.context().to_string(),
                })
            })
            .collect()
    }

    /// First non-zero value of `tag` in document order.
    pub fn first_value(&self, tag: &str) -> Option<f64> {
        self.values(tag).first().map(|v| v.value)
    }

    /// First non-empty text of `tag` in document order.
    pub fn first_text(&self, tag: &str) -> Option<String> {
        self.text_values(tag).into_iter().next().map(|t| t.value)
    }
}

/// First value reported under `context`.
pub fn value_in_context(values: &[ResolvedValue], context: &str) -> Option<f64> {
    values.iter().find(|v| v.context == context).map(|v| v.value)
}

/// All text values reported under `context`.
pub fn texts_in_context(texts: &[ResolvedText], context: &str) -> Vec<String> {
    texts
        .iter()
        .filter(|t| t.context == context)
        .map(|t| t.value.clone())
        .collect()
}
