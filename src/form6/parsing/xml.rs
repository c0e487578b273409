use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

// Root children that carry document structure rather than facts
const NON_FACT_ELEMENTS: [&str; 7] = [
    "context",
    "unit",
    "xbrl",
    "schemaRef",
    "roleRef",
    "arcroleRef",
    "footnoteLink",
];

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Malformed XML: {0}")]
    Malformed(#[from] roxmltree::Error),

    #[error("Unexpected root element <{0}>, expected <xbrl>")]
    UnexpectedRoot(String),

    #[error("Root element has no children")]
    Empty,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FactItem {
    pub prefix: String,
    pub name: String,
    pub value: String,
    pub decimals: Option<String>,
    pub context_ref: Option<String>,
    pub unit_ref: Option<String>,
}

impl FactItem {
    /// Qualified tag name as written in the filing, e.g. `ferc:TrunkRevenues`.
    pub fn tag(&self) -> String {
        if self.prefix.is_empty() {
            self.name.clone()
        } else {
            format!("{}:{}", self.prefix, self.name)
        }
    }

    pub fn context(&self) -> &str {
        self.context_ref.as_deref().unwrap_or("")
    }
}

/// Facts of one filing, grouped by qualified tag name.
///
/// Within a tag, facts keep the order they appear in the source document.
#[derive(Clone, Debug, Default)]
pub struct FilingDocument {
    facts: HashMap<String, Vec<FactItem>>,
    fact_count: usize,
}

impl FilingDocument {
    pub fn parse(raw_xml: &str) -> Result<Self, DocumentError> {
        Ok(Self::from_facts(parse_xml_to_facts(raw_xml)?))
    }

    pub fn from_facts(facts: Vec<FactItem>) -> Self {
        let fact_count = facts.len();
        let mut grouped: HashMap<String, Vec<FactItem>> = HashMap::new();
        for fact in facts {
            grouped.entry(fact.tag()).or_default().push(fact);
        }
        Self {
            facts: grouped,
            fact_count,
        }
    }

    pub fn facts(&self, tag: &str) -> &[FactItem] {
        self.facts.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.facts.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.fact_count
    }

    pub fn is_empty(&self) -> bool {
        self.fact_count == 0
    }
}

pub fn parse_xml_to_facts(raw_xml: &str) -> Result<Vec<FactItem>, DocumentError> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let xml_tree = roxmltree::Document::parse_with_options(raw_xml, options)?;

    let root = xml_tree.root_element();
    if root.tag_name().name() != "xbrl" {
        return Err(DocumentError::UnexpectedRoot(root.tag_name().name().to_string()));
    }
    if !root.children().any(|e| e.is_element()) {
        return Err(DocumentError::Empty);
    }

    let mut facts = Vec::new();

    let fact_ele = root.children().filter(|e| {
        e.is_element()
            && !NON_FACT_ELEMENTS.contains(&e.tag_name().name())
            && e.tag_name().namespace().is_some()
    });

    for child in fact_ele {
        let name = child.tag_name().name();
        let namespace = child.tag_name().namespace().unwrap_or("");
        let prefix = child.lookup_prefix(namespace).unwrap_or("");
        let context_ref = child.attribute("contextRef");
        let unit_ref = child.attribute("unitRef");

        let raw_value: String = child
            .descendants()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect();

        log::debug!(
            "Fact: {}:{} {} {} {}",
            prefix,
            name,
            raw_value.trim(),
            context_ref.unwrap_or("no context"),
            unit_ref.unwrap_or("no unit")
        );

        facts.push(FactItem {
            prefix: prefix.to_string(),
            name: name.to_string(),
            value: sanitize_value(&raw_value),
            decimals: child.attribute("decimals").map(String::from),
            context_ref: context_ref.map(String::from),
            unit_ref: unit_ref.map(String::from),
        });
    }

    Ok(facts)
}

fn sanitize_value(input: &str) -> String {
    let mut output: String = input.nfkc().collect();

    // Text blocks sometimes carry escaped HTML
    if output.contains('<') {
        let fragment = Html::parse_fragment(&output);
        output = fragment.root_element().text().collect::<Vec<_>>().join(" ");
    }

    WHITESPACE.replace_all(output.trim(), " ").to_string()
}
