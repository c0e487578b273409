//! Fixed Form 6 tag tables.
//!
//! Labels are part of the output contract; changing one changes what
//! consumers of the detail report see.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

pub type TagTable = &'static [(&'static str, &'static str)];

// Financial summary
pub const TRUNK_REVENUES: &str = "ferc:TrunkRevenues";
pub const GATHERING_REVENUES: &str = "ferc:GatheringRevenues";
pub const DELIVERY_REVENUES: &str = "ferc:DeliveryRevenues";
pub const OPERATION_EXPENSE: &str = "ferc:OperationExpense";
pub const MAINTENANCE_EXPENSE: &str = "ferc:MaintenanceExpense";
pub const CARRIER_PROPERTY: &str = "ferc:CarrierProperty";
pub const ASSETS_AND_OTHER_DEBITS: &str = "ferc:AssetsAndOtherDebits";
pub const NET_INCOME: &str = "ferc:NetIncome";
pub const NET_OPERATING_INCOME: &str = "ferc:NetOperatingIncome";

// Pipeline systems
pub const PIPELINE_SYSTEM_NAME: &str = "ferc:PipelineSystemName";
pub const PIPELINE_SYSTEM_IDENTIFIER: &str = "ferc:PipelineSystemIdentifier";
pub const MILES_OF_PIPELINE: &str = "ferc:MilesOfPipeline";
pub const TOTAL_MILES_OF_PIPELINE: &str = "ferc:TotalMilesOfPipeline";
pub const STATE_OR_TERRITORY: &str = "ferc:StateOrTerritory";

pub const STATE_TAGS: [&str; 3] = [
    STATE_OR_TERRITORY,
    "ferc:StateOfIncorporation",
    "ferc:StateName",
];

/// State codes are two or three characters; longer values are free text.
pub const MAX_STATE_CODE_LEN: usize = 3;

// Pipeline segments
pub const PIPELINE_START_POINT: &str = "ferc:PipelineStartPoint";
pub const PIPELINE_END_POINT: &str = "ferc:PipelineEndPoint";
pub const GATHERING_MILES: &str = "ferc:MilesOfGatheringLinesOperated";
pub const GATHERING_SIZE: &str = "ferc:SizeOfGatheringLinesOperated";
pub const TRUNK_CRUDE_MILES: &str = "ferc:MilesOfTrunkLinesForCrudeOilOperated";
pub const TRUNK_CRUDE_SIZE: &str = "ferc:SizeOfTrunkLinesForCrudeOilOperated";
pub const TRUNK_PRODUCT_MILES: &str = "ferc:MilesOfTrunkLinesForProductsOperated";
pub const TRUNK_PRODUCT_SIZE: &str = "ferc:SizeOfTrunkLinesForProductsOperated";

pub const UNKNOWN_END_POINT: &str = "Unknown";

pub const COMPANY_INFO: TagTable = &[
    ("ferc:AddressOfPrincipalOfficeAtEndOfPeriod", "Principal Office"),
    ("ferc:NameOfContactPerson", "Contact Person"),
    ("ferc:TitleOfContactPerson", "Contact Title"),
    ("ferc:TelephoneOfContactPerson", "Contact Phone"),
    ("ferc:AddressOfContactPerson", "Contact Address"),
    ("ferc:IncorporationDate", "Incorporation Date"),
    ("ferc:SpecialLawRespondentIncorporatedUnder", "Incorporation Law"),
    ("ferc:PreviousName", "Previous Name"),
];

pub const REVENUES: TagTable = &[
    ("ferc:TrunkRevenues", "Trunk Revenues"),
    ("ferc:GatheringRevenues", "Gathering Revenues"),
    ("ferc:DeliveryRevenues", "Delivery Revenues"),
    ("ferc:OperatingRevenues", "Operating Revenues"),
    ("ferc:AllowanceOilRevenue", "Allowance Oil Revenue"),
    ("ferc:StorageAndDemurrageRevenue", "Storage & Demurrage"),
    ("ferc:RentalRevenue", "Rental Revenue"),
    ("ferc:IncidentalRevenue", "Incidental Revenue"),
    ("ferc:GatheringTrunkAndDeliveryRevenues", "Total GT&D Revenues"),
];

pub const OPERATING_EXPENSES: TagTable = &[
    ("ferc:OperationsAndMaintenanceExpensesOil", "O&M Expenses"),
    ("ferc:SalariesAndWagesOperationsAndMaintenance", "O&M Salaries & Wages"),
    ("ferc:MaterialsAndSuppliesOperationsAndMaintenance", "O&M Materials & Supplies"),
    ("ferc:OutsideServicesOperationsAndMaintenance", "O&M Outside Services"),
    ("ferc:OperatingFuelAndPowerOperationsAndMaintenance", "Fuel & Power"),
    ("ferc:RentalsOperationsAndMaintenance", "O&M Rentals"),
    ("ferc:OilLossesAndShortagesOperationsAndMaintenance", "Oil Losses"),
    ("ferc:OtherExpensesOperationsAndMaintenance", "O&M Other Expenses"),
];

pub const GENERAL_EXPENSES: TagTable = &[
    ("ferc:GeneralExpensesOil", "Total General Expenses"),
    ("ferc:SalariesAndWagesGeneralExpense", "General Salaries & Wages"),
    ("ferc:MaterialsAndSuppliesGeneralExpense", "General Materials"),
    ("ferc:OutsideServicesGeneralExpense", "General Outside Services"),
    ("ferc:DepreciationAndAmortizationGeneralExpense", "Depreciation & Amortization"),
    ("ferc:DepreciationExpenseForAssetRetirementCosts", "Asset Retirement Depreciation"),
    ("ferc:InsuranceGeneralExpense", "Insurance"),
    ("ferc:RentalsGeneralExpense", "General Rentals"),
    ("ferc:PipelineTaxesGeneralExpense", "Pipeline Taxes"),
    ("ferc:AccretionExpense", "Accretion Expense"),
    ("ferc:OtherExpensesGeneralExpense", "General Other Expenses"),
];

pub const INCOME_STATEMENT: TagTable = &[
    ("ferc:OperatingExpenses", "Total Operating Expenses"),
    ("ferc:NetCarrierOperatingIncome", "Net Carrier Operating Income"),
    ("ferc:OrdinaryIncomeBeforeFederalIncomeTaxes", "Income Before Taxes"),
    ("ferc:FederalIncomeTaxesOnIncomeFromContinuingOperations", "Federal Income Taxes"),
    ("ferc:ProvisionForDeferredTaxes", "Deferred Taxes"),
    ("ferc:IncomeLossFromContinuingOperations", "Income from Continuing Ops"),
    ("ferc:NetIncomeLoss", "Net Income (Loss)"),
    ("ferc:ComprehensiveIncomeLoss", "Comprehensive Income"),
    ("ferc:InterestExpense", "Interest Expense"),
    ("ferc:InterestAndDividendIncome", "Interest & Dividend Income"),
    ("ferc:MiscellaneousIncome", "Miscellaneous Income"),
];

pub const ASSETS: TagTable = &[
    ("ferc:CarrierProperty", "Carrier Property (Gross)"),
    ("ferc:CarrierPropertyNet", "Carrier Property (Net)"),
    ("ferc:Assets", "Total Assets"),
    ("ferc:CarrierPropertyTrunkLines", "Trunk Lines Property"),
    ("ferc:CarrierPropertyGatheringLines", "Gathering Lines Property"),
    ("ferc:AccruedDepreciationCarrierProperty", "Accumulated Depreciation"),
    ("ferc:CurrentAssets", "Current Assets"),
    ("ferc:CashAndCashEquivalents", "Cash"),
    ("ferc:AccountsReceivable", "Accounts Receivable"),
    ("ferc:ReceivablesFromAffiliatedCompanies", "Receivables from Affiliates"),
    ("ferc:OilInventory", "Oil Inventory"),
    ("ferc:MaterialAndSupplies", "Materials & Supplies"),
    ("ferc:Prepayments", "Prepayments"),
    ("ferc:OtherCurrentAssets", "Other Current Assets"),
    ("ferc:OtherDeferredCharges", "Other Deferred Charges"),
    ("ferc:ConstructionWorkInProgressGeneralCarrierProperty", "Construction WIP"),
];

pub const LIABILITIES_EQUITY: TagTable = &[
    ("ferc:Liabilities", "Total Liabilities"),
    ("ferc:LiabilitiesAndStockholdersEquity", "Total Liab & Equity"),
    ("ferc:CurrentLiabilities", "Current Liabilities"),
    ("ferc:NoncurrentLiabilities", "Non-Current Liabilities"),
    ("ferc:AccountsPayable", "Accounts Payable"),
    ("ferc:PayablesToAffiliatedCompanies", "Payables to Affiliates"),
    ("ferc:TaxesPayable", "Taxes Payable"),
    ("ferc:LongTermDebt", "Long-Term Debt"),
    ("ferc:LongTermDebtPayableAfterOneYear", "LT Debt (After 1 Yr)"),
    ("ferc:LongTermDebtPayableWithinOneYear", "LT Debt (Within 1 Yr)"),
    ("ferc:AssetRetirementObligations", "Asset Retirement Obligations"),
    ("ferc:OtherNoncurrentLiabilities", "Other Non-Current Liabilities"),
    ("ferc:StockholdersEquity", "Stockholders Equity"),
    ("ferc:CapitalStock", "Capital Stock"),
    ("ferc:AdditionalPaidInCapital", "Additional Paid-In Capital"),
    ("ferc:UnappropriatedRetainedIncome", "Retained Earnings"),
];

pub const CASH_FLOW: TagTable = &[
    ("ferc:NetCashProvidedByUsedInOperatingActivities", "Cash from Operations"),
    ("ferc:CashFlowsProvidedFromUsedInInvestmentActivities", "Cash from Investing"),
    ("ferc:CashFlowsProvidedFromUsedInFinancingActivities", "Cash from Financing"),
    ("ferc:NetIncreaseDecreaseInCashAndCashEquivalents", "Net Change in Cash"),
    ("ferc:DepreciationAndDepletion", "Depreciation & Depletion"),
    ("ferc:Amortization", "Amortization"),
    ("ferc:DeferredIncomeTaxesNet", "Deferred Income Taxes"),
    ("ferc:NetIncreaseDecreaseInReceivablesOperatingActivities", "Change in Receivables"),
    (
        "ferc:NetIncreaseDecreaseInPayablesAndAccruedExpensesOperatingActivities",
        "Change in Payables",
    ),
    ("ferc:GrossAdditionsToCarrierPropertyInvestmentActivities", "Capital Expenditures"),
    ("ferc:CashOutflowsForPlant", "Cash Outflows for Plant"),
];

pub const OPERATIONAL: TagTable = &[
    ("ferc:NumberOfBarrelsReceived", "Barrels Received"),
    ("ferc:NumberOfBarrelsDeliveredOut", "Barrels Delivered"),
    ("ferc:NumberOfBarrelsReceivedOnGatheringLines", "Barrels Received (Gathering)"),
    ("ferc:NumberOfBarrelsReceivedOnTrunkLines", "Barrels Received (Trunk)"),
    ("ferc:NumberOfBarrelsDeliveredOutOnGatheringLines", "Barrels Delivered (Gathering)"),
    ("ferc:NumberOfBarrelsDeliveredOutOnTrunkLines", "Barrels Delivered (Trunk)"),
    ("ferc:NumberOfBarrelMiles", "Total Barrel-Miles"),
    ("ferc:NumberOfBarrelMilesOnTrunkLinesOfCrudeOil", "Barrel-Miles (Crude)"),
    ("ferc:NumberOfBarrelMilesOnTrunkLinesOfOilProducts", "Barrel-Miles (Products)"),
    ("ferc:AverageNumberOfEmployees", "Employees (Average)"),
    ("ferc:ThroughputVolume", "Throughput Volume"),
    ("ferc:PipelineCapacity", "Pipeline Capacity"),
];

pub const RATE_BASE: TagTable = &[
    ("ferc:ReturnOnRateBase", "Return on Rate Base"),
    ("ferc:DebtComponentReturnOnRateBase", "Debt Component Return"),
    ("ferc:EquityComponentReturnOnRateBase", "Equity Component Return"),
    ("ferc:IncomeTaxAllowance", "Income Tax Allowance"),
    ("ferc:CompositeTaxRate", "Composite Tax Rate"),
    ("ferc:OriginalCostIncludedInRateBase", "Original Cost in Rate Base"),
    ("ferc:TrendedOriginalCostRateBase", "Trended Original Cost Rate Base"),
    (
        "ferc:AccumulatedNetDeferredEarningsIncludedInRateBase",
        "Deferred Earnings in Rate Base",
    ),
    ("ferc:WeightedAverageCostOfCapitalRateOfReturn", "WACC"),
    ("ferc:RealCostOfStockholdersEquityRateOfReturn", "Cost of Equity"),
    ("ferc:CostOfLongTermDebtCapitalRateOfReturn", "Cost of Debt"),
    (
        "ferc:AdjustedCapitalStructureRatioForLongTermDebtRateOfReturn",
        "Debt Ratio",
    ),
    (
        "ferc:AdjustedCapitalStructureRatioForStockholdersEquityRateOfReturn",
        "Equity Ratio",
    ),
];

/// Numeric sections of the detail report.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
)]
pub enum DetailCategory {
    #[strum(to_string = "Financial")]
    Financial,
    #[strum(to_string = "Revenues")]
    Revenues,
    #[strum(to_string = "Operating Expenses")]
    OperatingExpenses,
    #[strum(to_string = "General Expenses")]
    GeneralExpenses,
    #[strum(to_string = "Assets")]
    Assets,
    #[strum(to_string = "Liabilities & Equity")]
    LiabilitiesEquity,
    #[strum(to_string = "Cash Flow")]
    CashFlow,
    #[strum(to_string = "Operational Stats")]
    Operational,
    #[strum(to_string = "Rate Base")]
    RateBase,
}

impl DetailCategory {
    pub fn tags(&self) -> TagTable {
        match self {
            DetailCategory::Financial => INCOME_STATEMENT,
            DetailCategory::Revenues => REVENUES,
            DetailCategory::OperatingExpenses => OPERATING_EXPENSES,
            DetailCategory::GeneralExpenses => GENERAL_EXPENSES,
            DetailCategory::Assets => ASSETS,
            DetailCategory::LiabilitiesEquity => LIABILITIES_EQUITY,
            DetailCategory::CashFlow => CASH_FLOW,
            DetailCategory::Operational => OPERATIONAL,
            DetailCategory::RateBase => RATE_BASE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use strum::IntoEnumIterator;

    #[test]
    fn test_table_sizes() {
        assert_eq!(COMPANY_INFO.len(), 8);
        assert_eq!(REVENUES.len(), 9);
        assert_eq!(OPERATING_EXPENSES.len(), 8);
        assert_eq!(GENERAL_EXPENSES.len(), 11);
        assert_eq!(INCOME_STATEMENT.len(), 11);
        assert_eq!(ASSETS.len(), 16);
        assert_eq!(LIABILITIES_EQUITY.len(), 16);
        assert_eq!(CASH_FLOW.len(), 11);
        assert_eq!(OPERATIONAL.len(), 12);
        assert_eq!(RATE_BASE.len(), 13);
    }

    #[test]
    fn test_tags_and_labels_unique_within_category() {
        for category in DetailCategory::iter() {
            let tags = category.tags();
            assert!(tags.iter().map(|(tag, _)| tag).all_unique(), "{}", category);
            assert!(tags.iter().map(|(_, label)| label).all_unique(), "{}", category);
            assert!(tags.iter().all(|(tag, _)| tag.starts_with("ferc:")));
        }
    }

    #[test]
    fn test_category_display() {
        assert_eq!(DetailCategory::LiabilitiesEquity.to_string(), "Liabilities & Equity");
        assert_eq!(DetailCategory::iter().count(), 9);
    }
}
