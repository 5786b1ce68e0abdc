//! The snapshot: every record the budget figures are computed from
//!
//! This is the data-loading boundary. Records arrive here already scoped to
//! one owner; the computations downstream only ever see a snapshot (or
//! slices windowed out of it).

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{
    BudgetPeriod, Category, CategoryId, Expense, Income, IncomeSource, IncomeSourceId,
};

/// Current on-disk layout version
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 2;

fn default_schema_version() -> u32 {
    1
}

/// All budget records for one owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Version 1 files may contain categories in the flat legacy layout
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub income_sources: Vec<IncomeSource>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub incomes: Vec<Income>,

    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            income_sources: Vec::new(),
            categories: Vec::new(),
            incomes: Vec::new(),
            expenses: Vec::new(),
        }
    }
}

impl Snapshot {
    pub fn source(&self, id: IncomeSourceId) -> Option<&IncomeSource> {
        self.income_sources.iter().find(|s| s.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Find a source by case-insensitive name, then by id
    pub fn find_source(&self, identifier: &str) -> Option<&IncomeSource> {
        let needle = identifier.trim();
        self.income_sources
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(needle))
            .or_else(|| {
                needle
                    .parse::<IncomeSourceId>()
                    .ok()
                    .and_then(|id| self.source(id))
            })
    }

    /// Find a category by case-insensitive name, then by id
    pub fn find_category(&self, identifier: &str) -> Option<&Category> {
        let needle = identifier.trim();
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(needle))
            .or_else(|| {
                needle
                    .parse::<CategoryId>()
                    .ok()
                    .and_then(|id| self.category(id))
            })
    }

    /// Incomes dated within `period`
    pub fn incomes_in(&self, period: &BudgetPeriod) -> Vec<Income> {
        self.incomes
            .iter()
            .filter(|income| period.contains(income.date))
            .cloned()
            .collect()
    }

    /// Expenses dated within `period`
    pub fn expenses_in(&self, period: &BudgetPeriod) -> Vec<Expense> {
        self.expenses
            .iter()
            .filter(|expense| period.contains(expense.date))
            .cloned()
            .collect()
    }

    /// Bring an older snapshot up to the current layout
    ///
    /// Categories whose legacy single-link fields can be expressed as an
    /// allocation list are rewritten; shadowed legacy fields are dropped.
    /// Returns the number of categories changed.
    pub fn migrate(&mut self) -> usize {
        if self.schema_version >= SNAPSHOT_SCHEMA_VERSION {
            return 0;
        }

        let migrated = self
            .categories
            .iter_mut()
            .map(Category::migrate_legacy)
            .filter(|changed| *changed)
            .count();

        info!(
            from = self.schema_version,
            to = SNAPSHOT_SCHEMA_VERSION,
            migrated,
            "migrated snapshot layout"
        );
        self.schema_version = SNAPSHOT_SCHEMA_VERSION;
        migrated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Allocation, Money};
    use crate::services::allocation::{resolve_category_allocation, source_figures};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_find_by_name_or_id() {
        let mut snapshot = Snapshot::default();
        let salary = IncomeSource::new("Salary");
        let salary_id = salary.id;
        snapshot.income_sources.push(salary);

        assert_eq!(snapshot.find_source("salary").map(|s| s.id), Some(salary_id));
        assert_eq!(
            snapshot.find_source(&salary_id.as_uuid().to_string()).map(|s| s.id),
            Some(salary_id)
        );
        assert!(snapshot.find_source("Bonus").is_none());
    }

    #[test]
    fn test_windowing() {
        let mut snapshot = Snapshot::default();
        let source = IncomeSourceId::new();
        snapshot.incomes.push(Income::new(source, Money::from_units(1), date(2025, 1, 31)));
        snapshot.incomes.push(Income::new(source, Money::from_units(2), date(2025, 2, 1)));

        let jan = BudgetPeriod::monthly(2025, 1);
        assert_eq!(snapshot.incomes_in(&jan).len(), 1);
        assert!(snapshot.expenses_in(&jan).is_empty());
    }

    #[test]
    fn test_v1_snapshot_migrates_without_changing_budgets() {
        let salary = IncomeSource::new("Salary").with_expected(Money::from_units(4000));
        let mut legacy = Category::new("Rent");
        legacy.linked_source_id = Some(salary.id);
        legacy.allocation_percent = Some(25.0);
        let modern = Category::new("Food").with_allocation(Allocation::percent(salary.id, 10.0));

        let mut snapshot = Snapshot {
            schema_version: 1,
            income_sources: vec![salary],
            categories: vec![legacy, modern],
            ..Snapshot::default()
        };

        let figures = source_figures(&snapshot.income_sources, &[]);
        let before: Vec<Money> = snapshot
            .categories
            .iter()
            .map(|c| resolve_category_allocation(c, &figures))
            .collect();

        assert_eq!(snapshot.migrate(), 1);
        assert_eq!(snapshot.schema_version, SNAPSHOT_SCHEMA_VERSION);
        assert!(snapshot.categories.iter().all(|c| !c.has_legacy_fields()));

        let after: Vec<Money> = snapshot
            .categories
            .iter()
            .map(|c| resolve_category_allocation(c, &figures))
            .collect();
        assert_eq!(before, after);
        assert_eq!(after[0], Money::from_units(1000));

        assert_eq!(snapshot.migrate(), 0);
    }

    #[test]
    fn test_missing_schema_version_means_v1() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot.schema_version, 1);
        assert!(snapshot.categories.is_empty());
    }
}
