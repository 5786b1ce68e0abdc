//! Budget service
//!
//! Windows a snapshot to one period and composes the allocation, balance,
//! source summary and carry-over computations into a budget overview.

use serde::Serialize;
use tracing::debug;

use super::allocation::{source_figures, SourceFigures};
use super::balance::{
    compute_category_budget, compute_period_balance, BudgetStatus, CategoryBudget, PeriodBalance,
};
use super::carryover::carry_over_into;
use super::source_summary::{summarize_source, SourceSummary};
use crate::error::{CrystalError, CrystalResult};
use crate::models::{BudgetPeriod, Category, CategoryId, Expense, Income, IncomeSourceId, Money};
use crate::storage::Snapshot;

/// Service for budget figures over a snapshot
pub struct BudgetService<'a> {
    snapshot: &'a Snapshot,
}

/// One category line of an overview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBudgetRow {
    pub category_id: CategoryId,
    pub name: String,
    pub icon: String,
    #[serde(flatten)]
    pub budget: CategoryBudget,
    pub status: BudgetStatus,
    pub usage_percent: f64,
}

/// One source line of an overview
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceSummaryRow {
    pub source_id: IncomeSourceId,
    pub name: String,
    pub color: String,
    #[serde(flatten)]
    pub summary: SourceSummary,
}

/// Everything shown for one period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetOverview {
    pub period: BudgetPeriod,
    pub balance: PeriodBalance,
    pub categories: Vec<CategoryBudgetRow>,
    pub sources: Vec<SourceSummaryRow>,
}

impl BudgetOverview {
    pub fn total_allocated(&self) -> Money {
        self.categories.iter().map(|row| row.budget.allocated).sum()
    }

    pub fn total_spent(&self) -> Money {
        self.categories.iter().map(|row| row.budget.spent).sum()
    }

    pub fn over_budget_count(&self) -> usize {
        self.categories
            .iter()
            .filter(|row| row.budget.is_over_budget())
            .count()
    }
}

/// A snapshot windowed to one period
struct PeriodWindow {
    incomes: Vec<Income>,
    expenses: Vec<Expense>,
    figures: SourceFigures,
}

impl<'a> BudgetService<'a> {
    pub fn new(snapshot: &'a Snapshot) -> Self {
        Self { snapshot }
    }

    fn window(&self, period: &BudgetPeriod) -> PeriodWindow {
        let incomes = self.snapshot.incomes_in(period);
        let expenses = self.snapshot.expenses_in(period);
        let figures = source_figures(&self.snapshot.income_sources, &incomes);

        PeriodWindow {
            incomes,
            expenses,
            figures,
        }
    }

    /// Compute the full overview for a period
    pub fn overview(&self, period: &BudgetPeriod) -> BudgetOverview {
        let window = self.window(period);
        let carry_over = self.carry_over(period);
        let balance = compute_period_balance(&window.incomes, &window.expenses, carry_over);

        let categories: Vec<CategoryBudgetRow> = self
            .snapshot
            .categories
            .iter()
            .map(|category| category_row(category, &window))
            .collect();

        let sources: Vec<SourceSummaryRow> = self
            .snapshot
            .income_sources
            .iter()
            .map(|source| SourceSummaryRow {
                source_id: source.id,
                name: source.name.clone(),
                color: source.color.clone(),
                summary: summarize_source(
                    source,
                    &window.incomes,
                    &self.snapshot.categories,
                    &window.expenses,
                ),
            })
            .collect();

        debug!(
            %period,
            incomes = window.incomes.len(),
            expenses = window.expenses.len(),
            categories = categories.len(),
            sources = sources.len(),
            "computed budget overview"
        );

        BudgetOverview {
            period: *period,
            balance,
            categories,
            sources,
        }
    }

    /// Budget for one category in a period
    pub fn category_budget(
        &self,
        category_id: CategoryId,
        period: &BudgetPeriod,
    ) -> CrystalResult<CategoryBudget> {
        let category = self
            .snapshot
            .category(category_id)
            .ok_or_else(|| CrystalError::category_not_found(category_id.to_string()))?;

        let window = self.window(period);
        Ok(compute_category_budget(category, &window.figures, &window.expenses))
    }

    /// Summary for one income source in a period
    pub fn source_summary(
        &self,
        source_id: IncomeSourceId,
        period: &BudgetPeriod,
    ) -> CrystalResult<SourceSummary> {
        let source = self
            .snapshot
            .source(source_id)
            .ok_or_else(|| CrystalError::source_not_found(source_id.to_string()))?;

        let window = self.window(period);
        Ok(summarize_source(
            source,
            &window.incomes,
            &self.snapshot.categories,
            &window.expenses,
        ))
    }

    /// Balance carried into `period` from everything before it
    pub fn carry_over(&self, period: &BudgetPeriod) -> Money {
        let carry_over = carry_over_into(period, &self.snapshot.incomes, &self.snapshot.expenses);
        debug!(%period, %carry_over, "computed carry-over");
        carry_over
    }
}

fn category_row(category: &Category, window: &PeriodWindow) -> CategoryBudgetRow {
    let budget = compute_category_budget(category, &window.figures, &window.expenses);

    CategoryBudgetRow {
        category_id: category.id,
        name: category.name.clone(),
        icon: category.icon.clone(),
        budget,
        status: budget.status(),
        usage_percent: budget.usage_percent(),
    }
}
