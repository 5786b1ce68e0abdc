//! Export of budget overviews
//!
//! - CSV: one row per category or per source (spreadsheet-compatible)
//! - JSON: the full overview with export metadata
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_categories_csv, export_sources_csv};
pub use json::{export_overview_json, OverviewExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_overview_yaml;

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Allocation, BudgetPeriod, Category, Expense, Income, IncomeSource, Money};
    use crate::services::BudgetService;
    use crate::storage::Snapshot;
    use chrono::{NaiveDate, TimeZone, Utc};

    /// April 2025: Salary 2000 received, Food gets 25% and spent 400
    pub(crate) fn sample_export() -> OverviewExport {
        let salary = IncomeSource::new("Salary");
        let food = Category::new("Food").with_allocation(Allocation::percent(salary.id, 25.0));
        let day = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();

        let snapshot = Snapshot {
            incomes: vec![Income::new(salary.id, Money::from_units(2000), day)],
            expenses: vec![Expense::new(food.id, Money::from_units(400), day)],
            income_sources: vec![salary],
            categories: vec![food],
            ..Snapshot::default()
        };

        let overview = BudgetService::new(&snapshot).overview(&BudgetPeriod::monthly(2025, 4));
        let exported_at = Utc.with_ymd_and_hms(2025, 4, 30, 12, 0, 0).unwrap();
        OverviewExport::new(overview, exported_at)
    }
}
