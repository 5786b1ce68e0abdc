//! Per-source summary
//!
//! For one income source: what it brought in, how much of it the categories
//! have claimed, what was spent in linked categories, and whether the
//! claims exceed the income (debt).
//!
//! Remaining and debt come from the allocated total, not from spending. A
//! source can show money remaining while its categories are overspent, and
//! the other way around.

use serde::Serialize;

use super::allocation::actual_income;
use crate::models::{Category, Expense, Income, IncomeSource, Money};

/// Figures for one income source over one period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceSummary {
    /// Income actually recorded in the period
    pub actual_income: Money,
    /// The effective figure: actual income, or the expected amount if none
    pub total_income: Money,
    /// Sum of all category contributions drawn from this source
    pub total_allocated: Money,
    /// Spending in categories linked to this source
    pub total_spent: Money,
    /// Unallocated income, never negative
    pub remaining: Money,
    /// Over-allocation beyond the income, never negative
    pub debt: Money,
}

impl SourceSummary {
    /// `remaining - debt`, equal to `total_income - total_allocated`
    pub fn net(&self) -> Money {
        self.remaining - self.debt
    }

    pub fn is_in_debt(&self) -> bool {
        self.debt.is_positive()
    }
}

/// Summarize `source` for a period
///
/// `source_incomes` and `period_expenses` are expected to be windowed to the
/// period already; incomes belonging to other sources are ignored.
pub fn summarize_source(
    source: &IncomeSource,
    source_incomes: &[Income],
    categories: &[Category],
    period_expenses: &[Expense],
) -> SourceSummary {
    let actual = actual_income(source.id, source_incomes);
    let effective = source.effective_figure(actual);

    let mut total_allocated = Money::zero();
    let mut total_spent = Money::zero();

    for category in categories.iter().filter(|c| c.is_linked_to(source.id)) {
        total_allocated += category
            .allocation_rules()
            .iter()
            .filter(|rule| rule.references(source.id))
            .map(|rule| rule.kind.contribution(effective))
            .sum::<Money>();

        total_spent += period_expenses
            .iter()
            .filter(|expense| expense.category_id == category.id)
            .map(|expense| expense.amount)
            .sum::<Money>();
    }

    let balance = effective - total_allocated;
    let (remaining, debt) = if balance.is_negative() {
        (Money::zero(), balance.abs())
    } else {
        (balance, Money::zero())
    };

    SourceSummary {
        actual_income: actual,
        total_income: effective,
        total_allocated,
        total_spent,
        remaining,
        debt,
    }
}
