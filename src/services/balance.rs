//! Category budgets and period balance
//!
//! A category's `remaining` is `allocated - spent` and goes negative when the
//! category is over budget. This is a different convention from the clamped
//! remaining/debt pair in [`super::source_summary`].

use serde::Serialize;
use std::fmt;

use super::allocation::{resolve_category_allocation, SourceFigures};
use crate::models::{Category, Expense, Income, Money};

/// Budget figures for one category in one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryBudget {
    pub allocated: Money,
    pub spent: Money,
    /// Unclamped; negative means over budget
    pub remaining: Money,
}

impl CategoryBudget {
    /// Spending as a percentage of the allocation; 0 when nothing is allocated
    pub fn usage_percent(&self) -> f64 {
        self.spent.percent_of(self.allocated)
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.allocated
    }

    pub fn status(&self) -> BudgetStatus {
        BudgetStatus::classify(self)
    }
}

/// Display banding of a category's usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OverBudget,
    Critical,
    Attention,
    Normal,
    Good,
}

impl BudgetStatus {
    /// Over budget when spent exceeds allocated, otherwise banded on usage:
    /// above 90% critical, above 70% attention, above 50% normal, else good
    pub fn classify(budget: &CategoryBudget) -> Self {
        if budget.is_over_budget() {
            return Self::OverBudget;
        }
        let usage = budget.usage_percent();
        if usage > 90.0 {
            Self::Critical
        } else if usage > 70.0 {
            Self::Attention
        } else if usage > 50.0 {
            Self::Normal
        } else {
            Self::Good
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OverBudget => "over budget",
            Self::Critical => "critical",
            Self::Attention => "attention",
            Self::Normal => "normal",
            Self::Good => "good",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Compute a category's budget for a period
///
/// Only expenses whose category matches contribute to `spent`.
pub fn compute_category_budget(
    category: &Category,
    figures: &SourceFigures,
    category_expenses: &[Expense],
) -> CategoryBudget {
    let allocated = resolve_category_allocation(category, figures);
    let spent: Money = category_expenses
        .iter()
        .filter(|expense| expense.category_id == category.id)
        .map(|expense| expense.amount)
        .sum();

    CategoryBudget {
        allocated,
        spent,
        remaining: allocated - spent,
    }
}

/// Headline figures for a period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodBalance {
    /// All income recorded in the period
    pub month_income: Money,
    /// All expenses recorded in the period
    pub total_expenses: Money,
    /// `month_income - total_expenses`
    pub month_balance: Money,
    /// Balance rolled in from every earlier period
    pub carry_over: Money,
    /// `month_income + carry_over - total_expenses`
    pub total_balance: Money,
}

/// Compute the period's balances
///
/// Totals are independent of allocation: every income and every expense in
/// the period counts, whatever source or category it references.
pub fn compute_period_balance(
    period_incomes: &[Income],
    period_expenses: &[Expense],
    carry_over: Money,
) -> PeriodBalance {
    let month_income: Money = period_incomes.iter().map(|income| income.amount).sum();
    let total_expenses: Money = period_expenses.iter().map(|expense| expense.amount).sum();

    PeriodBalance {
        month_income,
        total_expenses,
        month_balance: month_income - total_expenses,
        carry_over,
        total_balance: month_income + carry_over - total_expenses,
    }
}
