use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::parsing::resolve::{texts_in_context, value_in_context};
use super::parsing::{ContextPredicate, FilingDocument, Resolver};
use super::taxonomy::{self, DetailCategory, TagTable};

/// A pipeline system reported in the filing.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Pipeline {
    pub name: String,
    pub id: String,
    pub miles: Option<f64>,
    pub states: Vec<String>,
}

/// One start/end run of line with its operated mileage and diameters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PipelineSegment {
    pub start_point: String,
    pub end_point: String,
    pub gathering_miles: Option<f64>,
    pub gathering_diameter: Option<f64>,
    pub trunk_crude_miles: Option<f64>,
    pub trunk_crude_diameter: Option<f64>,
    pub trunk_product_miles: Option<f64>,
    pub trunk_product_diameter: Option<f64>,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SegmentMileage {
    pub total_gathering_miles: f64,
    pub total_trunk_crude_miles: f64,
    pub total_trunk_products_miles: f64,
}

impl SegmentMileage {
    pub fn total(&self) -> f64 {
        self.total_gathering_miles + self.total_trunk_crude_miles + self.total_trunk_products_miles
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MileageSource {
    Reported,
    Segments,
}

/// Both mileage totals a filing supports, and which one is canonical.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct MileageTotals {
    /// `TotalMilesOfPipeline`, or the sum of distinct per-pipeline miles
    pub reported_miles: f64,
    /// Per-category sums of the segment mileage facts
    pub segment_miles: Option<SegmentMileage>,
    pub total_miles: f64,
    pub mileage_source: MileageSource,
}

impl MileageTotals {
    /// Segment totals supersede the reported total whenever segment data exists.
    pub fn resolve(reported_miles: f64, segment_miles: Option<SegmentMileage>) -> Self {
        match segment_miles {
            Some(segments) => Self {
                reported_miles,
                segment_miles,
                total_miles: segments.total(),
                mileage_source: MileageSource::Segments,
            },
            None => Self {
                reported_miles,
                segment_miles: None,
                total_miles: reported_miles,
                mileage_source: MileageSource::Reported,
            },
        }
    }
}

/// Everything reportable in one filing, grouped by section.
///
/// Numeric sections only hold non-zero values; a missing label means the
/// filing did not report it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DetailReport {
    pub company_name: String,
    pub file_name: String,
    pub pipelines: Vec<Pipeline>,
    pub pipeline_segments: Vec<PipelineSegment>,
    pub states: Vec<String>,
    #[serde(flatten)]
    pub mileage: MileageTotals,
    pub company_info: BTreeMap<String, String>,
    pub financial_data: BTreeMap<String, f64>,
    pub revenues: BTreeMap<String, f64>,
    pub operating_expenses: BTreeMap<String, f64>,
    pub general_expenses: BTreeMap<String, f64>,
    pub asset_data: BTreeMap<String, f64>,
    pub liabilities_equity: BTreeMap<String, f64>,
    pub cash_flow: BTreeMap<String, f64>,
    pub operational_data: BTreeMap<String, f64>,
    pub rate_base: BTreeMap<String, f64>,
}

impl DetailReport {
    pub fn extract<P: ContextPredicate + ?Sized>(
        document: &FilingDocument,
        predicate: &P,
        company_name: &str,
        file_name: &str,
    ) -> Self {
        let resolver = Resolver::new(document, predicate);
        let segments = pipeline_segments(&resolver);
        let segment_miles = (!segments.is_empty()).then(|| segment_mileage(&resolver));

        Self {
            company_name: company_name.to_string(),
            file_name: file_name.to_string(),
            pipelines: pipelines(&resolver),
            pipeline_segments: segments,
            states: states(&resolver),
            mileage: MileageTotals::resolve(reported_miles(&resolver), segment_miles),
            company_info: text_section(&resolver, taxonomy::COMPANY_INFO),
            financial_data: numeric_section(&resolver, DetailCategory::Financial.tags()),
            revenues: numeric_section(&resolver, DetailCategory::Revenues.tags()),
            operating_expenses: numeric_section(
                &resolver,
                DetailCategory::OperatingExpenses.tags(),
            ),
            general_expenses: numeric_section(&resolver, DetailCategory::GeneralExpenses.tags()),
            asset_data: numeric_section(&resolver, DetailCategory::Assets.tags()),
            liabilities_equity: numeric_section(
                &resolver,
                DetailCategory::LiabilitiesEquity.tags(),
            ),
            cash_flow: numeric_section(&resolver, DetailCategory::CashFlow.tags()),
            operational_data: numeric_section(&resolver, DetailCategory::Operational.tags()),
            rate_base: numeric_section(&resolver, DetailCategory::RateBase.tags()),
        }
    }

    pub fn category(&self, category: DetailCategory) -> &BTreeMap<String, f64> {
        match category {
            DetailCategory::Financial => &self.financial_data,
            DetailCategory::Revenues => &self.revenues,
            DetailCategory::OperatingExpenses => &self.operating_expenses,
            DetailCategory::GeneralExpenses => &self.general_expenses,
            DetailCategory::Assets => &self.asset_data,
            DetailCategory::LiabilitiesEquity => &self.liabilities_equity,
            DetailCategory::CashFlow => &self.cash_flow,
            DetailCategory::Operational => &self.operational_data,
            DetailCategory::RateBase => &self.rate_base,
        }
    }

    pub fn total_miles(&self) -> f64 {
        self.mileage.total_miles
    }
}

fn numeric_section<P: ContextPredicate + ?Sized>(
    resolver: &Resolver<'_, P>,
    table: TagTable,
) -> BTreeMap<String, f64> {
    table
        .iter()
        .filter_map(|(tag, label)| resolver.first_value(tag).map(|v| (label.to_string(), v)))
        .collect()
}

fn text_section<P: ContextPredicate + ?Sized>(
    resolver: &Resolver<'_, P>,
    table: TagTable,
) -> BTreeMap<String, String> {
    table
        .iter()
        .filter_map(|(tag, label)| resolver.first_text(tag).map(|v| (label.to_string(), v)))
        .collect()
}

fn pipelines<P: ContextPredicate + ?Sized>(resolver: &Resolver<'_, P>) -> Vec<Pipeline> {
    let names = resolver.text_values(taxonomy::PIPELINE_SYSTEM_NAME);
    let ids = resolver.text_values(taxonomy::PIPELINE_SYSTEM_IDENTIFIER);
    let miles = resolver.values(taxonomy::MILES_OF_PIPELINE);
    let states = resolver.text_values(taxonomy::STATE_OR_TERRITORY);

    names
        .iter()
        .enumerate()
        .map(|(i, name)| Pipeline {
            name: name.value.clone(),
            // identifiers pair with names by position, not context
            id: ids
                .get(i)
                .map(|id| id.value.clone())
                .unwrap_or_else(|| format!("Pipeline {}", i + 1)),
            miles: value_in_context(&miles, &name.context),
            states: texts_in_context(&states, &name.context),
        })
        .collect()
}

fn reported_miles<P: ContextPredicate + ?Sized>(resolver: &Resolver<'_, P>) -> f64 {
    if let Some(total) = resolver.first_value(taxonomy::TOTAL_MILES_OF_PIPELINE) {
        return total;
    }
    resolver
        .values(taxonomy::MILES_OF_PIPELINE)
        .iter()
        .map(|m| m.value)
        .unique_by(|v| v.to_bits())
        .sum()
}

fn states<P: ContextPredicate + ?Sized>(resolver: &Resolver<'_, P>) -> Vec<String> {
    taxonomy::STATE_TAGS
        .iter()
        .flat_map(|tag| resolver.text_values(tag))
        .map(|text| text.value)
        .filter(|value| value.chars().count() <= taxonomy::MAX_STATE_CODE_LEN)
        .unique()
        .collect()
}

fn pipeline_segments<P: ContextPredicate + ?Sized>(
    resolver: &Resolver<'_, P>,
) -> Vec<PipelineSegment> {
    let starts = resolver.text_values(taxonomy::PIPELINE_START_POINT);
    if starts.is_empty() {
        return Vec::new();
    }

    let ends = resolver.text_values(taxonomy::PIPELINE_END_POINT);
    let gathering_miles = resolver.values(taxonomy::GATHERING_MILES);
    let gathering_sizes = resolver.values(taxonomy::GATHERING_SIZE);
    let crude_miles = resolver.values(taxonomy::TRUNK_CRUDE_MILES);
    let crude_sizes = resolver.values(taxonomy::TRUNK_CRUDE_SIZE);
    let product_miles = resolver.values(taxonomy::TRUNK_PRODUCT_MILES);
    let product_sizes = resolver.values(taxonomy::TRUNK_PRODUCT_SIZE);

    starts
        .iter()
        .map(|start| {
            let ctx = start.context.as_str();
            PipelineSegment {
                start_point: start.value.clone(),
                end_point: ends
                    .iter()
                    .find(|end| end.context == ctx)
                    .map(|end| end.value.clone())
                    .unwrap_or_else(|| taxonomy::UNKNOWN_END_POINT.to_string()),
                gathering_miles: value_in_context(&gathering_miles, ctx),
                gathering_diameter: value_in_context(&gathering_sizes, ctx),
                trunk_crude_miles: value_in_context(&crude_miles, ctx),
                trunk_crude_diameter: value_in_context(&crude_sizes, ctx),
                trunk_product_miles: value_in_context(&product_miles, ctx),
                trunk_product_diameter: value_in_context(&product_sizes, ctx),
            }
        })
        .collect()
}

fn segment_mileage<P: ContextPredicate + ?Sized>(resolver: &Resolver<'_, P>) -> SegmentMileage {
    let sum = |tag: &str| resolver.values(tag).iter().map(|m| m.value).sum::<f64>();
    SegmentMileage {
        total_gathering_miles: sum(taxonomy::GATHERING_MILES),
        total_trunk_crude_miles: sum(taxonomy::TRUNK_CRUDE_MILES),
        total_trunk_products_miles: sum(taxonomy::TRUNK_PRODUCT_MILES),
    }
}
