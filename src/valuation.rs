//! Cost, income and market approach valuations seeded from a filing's
//! financial summary.

use serde::{Deserialize, Serialize};

use crate::core::error::ValuationError;
use crate::form6::FinancialSummary;

pub const FALLBACK_REPLACEMENT_COST: f64 = 80_000_000.0;
pub const FALLBACK_REVENUE: f64 = 15_000_000.0;
pub const FALLBACK_EXPENSES: f64 = 8_000_000.0;
pub const FALLBACK_EBITDA: f64 = 9_000_000.0;

pub const MAX_PROJECTION_YEARS: u32 = 100;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CostInputs {
    pub replacement_cost_new: f64,
    /// Percentages of replacement cost
    pub physical_depreciation_pct: f64,
    pub functional_obsolescence_pct: f64,
    pub economic_obsolescence_pct: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CostApproach {
    pub physical_depreciation: f64,
    pub functional_obsolescence: f64,
    pub economic_obsolescence: f64,
    pub total_depreciation: f64,
    pub value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IncomeInputs {
    pub revenue: f64,
    pub expenses: f64,
    pub growth_pct: f64,
    pub discount_pct: f64,
    pub projection_years: u32,
    pub terminal_growth_pct: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct IncomeApproach {
    pub base_cash_flow: f64,
    pub pv_cash_flows: f64,
    pub pv_terminal_value: f64,
    pub value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MarketInputs {
    pub ebitda: f64,
    pub ev_ebitda_multiple: f64,
    pub size_adjustment_pct: f64,
    pub geographic_adjustment_pct: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MarketApproach {
    pub base_value: f64,
    pub size_adjustment: f64,
    pub geographic_adjustment: f64,
    pub value: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Weights {
    pub cost: f64,
    pub income: f64,
    pub market: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            cost: 30.0,
            income: 50.0,
            market: 20.0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Assumptions {
    pub cost: CostInputs,
    pub income: IncomeInputs,
    pub market: MarketInputs,
    pub weights: Weights,
}

impl Assumptions {
    /// Default calculator inputs for a filing, aged from `report_year` to `current_year`.
    pub fn from_summary(summary: &FinancialSummary, current_year: i32) -> Self {
        let rcn = non_zero_or(summary.carrier_property, FALLBACK_REPLACEMENT_COST);
        let revenue = non_zero_or(summary.operating_revenue, FALLBACK_REVENUE);
        let expenses = non_zero_or(summary.operating_expenses, FALLBACK_EXPENSES);
        let ebitda = non_zero_or(summary.ebitda, FALLBACK_EBITDA);

        let age = f64::from(current_year - summary.report_year);
        let margin = if revenue > 0.0 {
            (revenue - expenses) / revenue * 100.0
        } else {
            0.0
        };

        let growth_pct = (margin * 0.5).clamp(1.5, 5.0);
        let discount_pct = if margin > 15.0 {
            7.5
        } else if margin > 10.0 {
            8.5
        } else {
            10.0
        };

        let asset_size = non_zero_or(summary.total_assets, rcn);
        let size_multiple = if asset_size > 50_000_000.0 {
            11.0
        } else if asset_size > 20_000_000.0 {
            10.5
        } else {
            9.5
        };
        let profitability_bonus = if margin > 20.0 {
            0.5
        } else if margin > 15.0 {
            0.25
        } else {
            0.0
        };
        let size_adjustment_pct = if asset_size > 100_000_000.0 {
            0.0
        } else if asset_size > 50_000_000.0 {
            -2.0
        } else {
            -5.0
        };

        Self {
            cost: CostInputs {
                replacement_cost_new: rcn,
                physical_depreciation_pct: (25.0 + age * 1.5).min(60.0),
                functional_obsolescence_pct: (5.0 + age * 0.5).min(15.0),
                economic_obsolescence_pct: 3.0,
            },
            income: IncomeInputs {
                revenue,
                expenses,
                growth_pct,
                discount_pct,
                projection_years: 20,
                terminal_growth_pct: 2.0,
            },
            market: MarketInputs {
                ebitda,
                ev_ebitda_multiple: size_multiple + profitability_bonus,
                size_adjustment_pct,
                geographic_adjustment_pct: 2.0,
            },
            weights: Weights::default(),
        }
    }
}

fn non_zero_or(value: f64, fallback: f64) -> f64 {
    if value != 0.0 {
        value
    } else {
        fallback
    }
}

/// Replacement cost new less depreciation.
pub fn cost_approach(inputs: &CostInputs) -> CostApproach {
    let rcn = inputs.replacement_cost_new;
    let physical_depreciation = rcn * inputs.physical_depreciation_pct / 100.0;
    let functional_obsolescence = rcn * inputs.functional_obsolescence_pct / 100.0;
    let economic_obsolescence = rcn * inputs.economic_obsolescence_pct / 100.0;
    let total_depreciation =
        physical_depreciation + functional_obsolescence + economic_obsolescence;

    CostApproach {
        physical_depreciation,
        functional_obsolescence,
        economic_obsolescence,
        total_depreciation,
        value: rcn - total_depreciation,
    }
}

/// Discounted cash flow with a Gordon growth terminal value.
pub fn income_approach(inputs: &IncomeInputs) -> Result<IncomeApproach, ValuationError> {
    if inputs.discount_pct <= inputs.terminal_growth_pct {
        return Err(ValuationError::DiscountBelowTerminalGrowth {
            discount: inputs.discount_pct,
            terminal_growth: inputs.terminal_growth_pct,
        });
    }

    let growth = inputs.growth_pct / 100.0;
    let discount = inputs.discount_pct / 100.0;
    let terminal_growth = inputs.terminal_growth_pct / 100.0;
    let base_cash_flow = inputs.revenue - inputs.expenses;
    let years = match i32::try_from(inputs.projection_years) {
        Ok(years) if inputs.projection_years <= MAX_PROJECTION_YEARS => years,
        _ => return Err(ValuationError::ProjectionTooLong(inputs.projection_years)),
    };

    let pv_cash_flows: f64 = (1..=years)
        .map(|year| base_cash_flow * (1.0 + growth).powi(year) / (1.0 + discount).powi(year))
        .sum();

    let terminal_cash_flow = base_cash_flow * (1.0 + growth).powi(years + 1);
    let terminal_value = terminal_cash_flow / (discount - terminal_growth);
    let pv_terminal_value = terminal_value / (1.0 + discount).powi(years);

    Ok(IncomeApproach {
        base_cash_flow,
        pv_cash_flows,
        pv_terminal_value,
        value: pv_cash_flows + pv_terminal_value,
    })
}

/// EV/EBITDA multiple with size and geographic adjustments.
pub fn market_approach(inputs: &MarketInputs) -> MarketApproach {
    let base_value = inputs.ebitda * inputs.ev_ebitda_multiple;
    let size_adjustment = base_value * inputs.size_adjustment_pct / 100.0;
    let geographic_adjustment = base_value * inputs.geographic_adjustment_pct / 100.0;

    MarketApproach {
        base_value,
        size_adjustment,
        geographic_adjustment,
        value: base_value + size_adjustment + geographic_adjustment,
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Valuation {
    pub cost: CostApproach,
    pub income: IncomeApproach,
    pub market: MarketApproach,
    /// Weights after normalizing to a sum of one
    pub normalized_weights: Weights,
    pub value: f64,
}

/// Runs all three approaches and blends them by weight.
pub fn valuate(assumptions: &Assumptions) -> Result<Valuation, ValuationError> {
    let cost = cost_approach(&assumptions.cost);
    let income = income_approach(&assumptions.income)?;
    let market = market_approach(&assumptions.market);

    let weights = &assumptions.weights;
    let total = weights.cost + weights.income + weights.market;
    if total <= 0.0 {
        return Err(ValuationError::ZeroWeights);
    }
    let normalized_weights = Weights {
        cost: weights.cost / total,
        income: weights.income / total,
        market: weights.market / total,
    };

    let value = cost.value * normalized_weights.cost
        + income.value * normalized_weights.income
        + market.value * normalized_weights.market;

    Ok(Valuation {
        cost,
        income,
        market,
        normalized_weights,
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> FinancialSummary {
        FinancialSummary {
            company_name: "Example Pipeline Co".to_string(),
            file_name: "Example_Pipeline_Co_form6_Q4_2024.xbrl".to_string(),
            report_year: 2024,
            trunk_revenues: 12_500_000.0,
            gathering_revenues: 1_500_000.0,
            delivery_revenues: 0.0,
            operation_expenses: 4_000_000.0,
            maintenance_expenses: 1_000_000.0,
            carrier_property: 95_000_000.0,
            total_assets: 120_000_000.0,
            net_income: 6_200_000.0,
            operating_revenue: 14_000_000.0,
            operating_expenses: 5_000_000.0,
            ebitda: 9_000_000.0,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6 * expected.abs().max(1.0),
            "{} != {}",
            actual,
            expected
        );
    }

    #[test]
    fn test_cost_approach() {
        let result = cost_approach(&CostInputs {
            replacement_cost_new: 1_000_000.0,
            physical_depreciation_pct: 25.0,
            functional_obsolescence_pct: 5.0,
            economic_obsolescence_pct: 3.0,
        });
        assert_close(result.total_depreciation, 330_000.0);
        assert_close(result.value, 670_000.0);
    }

    #[test]
    fn test_income_approach_without_growth() {
        let result = income_approach(&IncomeInputs {
            revenue: 200.0,
            expenses: 100.0,
            growth_pct: 0.0,
            discount_pct: 10.0,
            projection_years: 1,
            terminal_growth_pct: 0.0,
        })
        .unwrap();

        assert_close(result.base_cash_flow, 100.0);
        assert_close(result.pv_cash_flows, 100.0 / 1.1);
        // 100 / 0.10 discounted one year
        assert_close(result.pv_terminal_value, 1000.0 / 1.1);
        assert_close(result.value, 1100.0 / 1.1);
    }

    #[test]
    fn test_income_approach_rejects_low_discount() {
        let err = income_approach(&IncomeInputs {
            revenue: 200.0,
            expenses: 100.0,
            growth_pct: 0.0,
            discount_pct: 2.0,
            projection_years: 5,
            terminal_growth_pct: 2.0,
        })
        .unwrap_err();
        assert!(matches!(err, ValuationError::DiscountBelowTerminalGrowth { .. }));
    }

    #[test]
    fn test_income_approach_rejects_long_projection() {
        let mut inputs = IncomeInputs {
            revenue: 200.0,
            expenses: 100.0,
            growth_pct: 3.0,
            discount_pct: 10.0,
            projection_years: u32::MAX,
            terminal_growth_pct: 2.0,
        };
        assert_eq!(
            income_approach(&inputs).unwrap_err(),
            ValuationError::ProjectionTooLong(u32::MAX)
        );

        inputs.projection_years = MAX_PROJECTION_YEARS + 1;
        assert!(income_approach(&inputs).is_err());

        inputs.projection_years = MAX_PROJECTION_YEARS;
        assert!(income_approach(&inputs).unwrap().value.is_finite());
    }

    #[test]
    fn test_market_approach() {
        let result = market_approach(&MarketInputs {
            ebitda: 1_000_000.0,
            ev_ebitda_multiple: 10.0,
            size_adjustment_pct: -5.0,
            geographic_adjustment_pct: 2.0,
        });
        assert_close(result.base_value, 10_000_000.0);
        assert_close(result.size_adjustment, -500_000.0);
        assert_close(result.value, 9_700_000.0);
    }

    #[test]
    fn test_assumptions_from_summary() {
        let assumptions = Assumptions::from_summary(&summary(), 2026);

        assert_eq!(assumptions.cost.replacement_cost_new, 95_000_000.0);
        assert_close(assumptions.cost.physical_depreciation_pct, 28.0);
        assert_close(assumptions.cost.functional_obsolescence_pct, 6.0);
        // margin is 64.3%, so growth caps at 5% and the discount is the low tier
        assert_eq!(assumptions.income.growth_pct, 5.0);
        assert_eq!(assumptions.income.discount_pct, 7.5);
        assert_eq!(assumptions.market.ev_ebitda_multiple, 11.5);
        assert_eq!(assumptions.market.size_adjustment_pct, 0.0);
    }

    #[test]
    fn test_assumptions_fallbacks() {
        let mut empty = summary();
        empty.carrier_property = 0.0;
        empty.total_assets = 0.0;
        empty.operating_revenue = 0.0;
        empty.operating_expenses = 0.0;
        empty.ebitda = 0.0;

        let assumptions = Assumptions::from_summary(&empty, 2024);
        assert_eq!(assumptions.cost.replacement_cost_new, FALLBACK_REPLACEMENT_COST);
        assert_eq!(assumptions.income.revenue, FALLBACK_REVENUE);
        assert_eq!(assumptions.income.expenses, FALLBACK_EXPENSES);
        assert_eq!(assumptions.market.ebitda, FALLBACK_EBITDA);
        assert_close(assumptions.cost.physical_depreciation_pct, 25.0);
        // 80M of assets lands in the middle size tier
        assert_eq!(assumptions.market.size_adjustment_pct, -2.0);
    }

    #[test]
    fn test_valuate_weights() {
        let mut assumptions = Assumptions::from_summary(&summary(), 2024);
        assumptions.weights = Weights {
            cost: 1.0,
            income: 0.0,
            market: 1.0,
        };
        let valuation = valuate(&assumptions).unwrap();
        assert_close(valuation.normalized_weights.cost, 0.5);
        assert_close(
            valuation.value,
            (valuation.cost.value + valuation.market.value) / 2.0,
        );

        assumptions.weights = Weights {
            cost: 0.0,
            income: 0.0,
            market: 0.0,
        };
        assert_eq!(valuate(&assumptions).unwrap_err(), ValuationError::ZeroWeights);
    }
}
