use serde::{Deserialize, Serialize};

use super::parsing::{ContextPredicate, FilingDocument, Resolver};
use super::taxonomy::*;

/// Headline figures of one filing. Missing components are zero.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FinancialSummary {
    pub company_name: String,
    pub file_name: String,
    pub report_year: i32,

    pub trunk_revenues: f64,
    pub gathering_revenues: f64,
    pub delivery_revenues: f64,

    pub operation_expenses: f64,
    pub maintenance_expenses: f64,

    pub carrier_property: f64,
    pub total_assets: f64,
    pub net_income: f64,

    pub operating_revenue: f64,
    pub operating_expenses: f64,
    pub ebitda: f64,
}

impl FinancialSummary {
    pub fn extract<P: ContextPredicate + ?Sized>(
        document: &FilingDocument,
        predicate: &P,
        company_name: &str,
        file_name: &str,
        report_year: i32,
    ) -> Self {
        let resolver = Resolver::new(document, predicate);

        // a zero net income falls through to net operating income
        let net_income = resolver
            .value(NET_INCOME)
            .filter(|v| *v != 0.0)
            .or_else(|| resolver.value(NET_OPERATING_INCOME))
            .unwrap_or(0.0);

        let mut summary = Self {
            company_name: company_name.to_string(),
            file_name: file_name.to_string(),
            report_year,
            trunk_revenues: resolver.value_or_zero(TRUNK_REVENUES),
            gathering_revenues: resolver.value_or_zero(GATHERING_REVENUES),
            delivery_revenues: resolver.value_or_zero(DELIVERY_REVENUES),
            operation_expenses: resolver.value_or_zero(OPERATION_EXPENSE),
            maintenance_expenses: resolver.value_or_zero(MAINTENANCE_EXPENSE),
            carrier_property: resolver.value_or_zero(CARRIER_PROPERTY),
            total_assets: resolver.value_or_zero(ASSETS_AND_OTHER_DEBITS),
            net_income,
            operating_revenue: 0.0,
            operating_expenses: 0.0,
            ebitda: 0.0,
        };
        summary.compute_totals();
        summary
    }

    fn compute_totals(&mut self) {
        self.operating_revenue =
            self.trunk_revenues + self.gathering_revenues + self.delivery_revenues;
        self.operating_expenses = self.operation_expenses + self.maintenance_expenses;
        self.ebitda = self.operating_revenue - self.operating_expenses;
    }

    /// Operating margin in percent, zero without revenue.
    pub fn profit_margin(&self) -> f64 {
        if self.operating_revenue > 0.0 {
            (self.operating_revenue - self.operating_expenses) / self.operating_revenue * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form6::parsing::tests::read_test_file;
    use crate::form6::parsing::{CurrentPeriod, FactItem};

    fn fact(name: &str, value: &str, context: &str) -> FactItem {
        FactItem {
            prefix: "ferc".to_string(),
            name: name.to_string(),
            value: value.to_string(),
            decimals: Some("0".to_string()),
            context_ref: Some(context.to_string()),
            unit_ref: Some("USD".to_string()),
        }
    }

    fn summarize(facts: Vec<FactItem>) -> FinancialSummary {
        let document = FilingDocument::from_facts(facts);
        FinancialSummary::extract(
            &document,
            &CurrentPeriod::default(),
            "Test Co",
            "Test_Co_form6_Q4_2024.xbrl",
            2024,
        )
    }

    #[test]
    fn test_missing_tags_default_to_zero() {
        let summary = summarize(vec![fact("Unrelated", "12", "C1")]);
        assert_eq!(summary.trunk_revenues, 0.0);
        assert_eq!(summary.net_income, 0.0);
        assert_eq!(summary.operating_revenue, 0.0);
        assert_eq!(summary.operating_expenses, 0.0);
        assert_eq!(summary.ebitda, 0.0);
        assert_eq!(summary.profit_margin(), 0.0);
    }

    #[test]
    fn test_aggregates() {
        let summary = summarize(vec![
            fact("TrunkRevenues", "1000", "C1"),
            fact("GatheringRevenues", "200", "C1"),
            fact("DeliveryRevenues", "50", "C1"),
            fact("OperationExpense", "300", "C1"),
            fact("MaintenanceExpense", "100", "C1"),
        ]);
        assert_eq!(summary.operating_revenue, 1250.0);
        assert_eq!(summary.operating_expenses, 400.0);
        assert_eq!(summary.ebitda, 850.0);
        assert_eq!(summary.profit_margin(), 68.0);
    }

    #[test]
    fn test_net_income_fallback() {
        let summary = summarize(vec![
            fact("NetIncome", "0", "C1"),
            fact("NetOperatingIncome", "640", "C1"),
        ]);
        assert_eq!(summary.net_income, 640.0);

        let summary = summarize(vec![fact("NetOperatingIncome", "-25", "C1")]);
        assert_eq!(summary.net_income, -25.0);

        let summary = summarize(vec![
            fact("NetIncome", "90", "C1"),
            fact("NetOperatingIncome", "640", "C1"),
        ]);
        assert_eq!(summary.net_income, 90.0);
    }

    #[test]
    fn test_fixture_summary() {
        let content = read_test_file("Example_Pipeline_Co_form6_Q4_2024.xbrl");
        let document = FilingDocument::parse(&content).unwrap();
        let summary = FinancialSummary::extract(
            &document,
            &CurrentPeriod::default(),
            "Example Pipeline Co",
            "Example_Pipeline_Co_form6_Q4_2024.xbrl",
            2024,
        );

        assert_eq!(summary.trunk_revenues, 12_500_000.0);
        assert_eq!(summary.gathering_revenues, 1_500_000.0);
        assert_eq!(summary.delivery_revenues, 0.0);
        assert_eq!(summary.operation_expenses, 4_000_000.0);
        assert_eq!(summary.maintenance_expenses, 1_000_000.0);
        assert_eq!(summary.carrier_property, 95_000_000.0);
        assert_eq!(summary.total_assets, 120_000_000.0);
        assert_eq!(summary.net_income, 6_200_000.0);
        assert_eq!(summary.operating_revenue, 14_000_000.0);
        assert_eq!(summary.operating_expenses, 5_000_000.0);
        assert_eq!(summary.ebitda, 9_000_000.0);
    }
}
