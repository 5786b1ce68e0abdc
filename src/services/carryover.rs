//! Carry-over accumulator
//!
//! The balance entering a month is everything earned minus everything spent
//! before that month started. It is recomputed from the full history on
//! every call; no running ledger is kept, so there is nothing to drift.

use crate::models::{BudgetPeriod, Expense, Income, Money};

/// Net balance of the given history: total income minus total expenses
///
/// Callers pass records already restricted to before the period. The
/// result may be negative (a carried deficit).
pub fn compute_carry_over(incomes_before: &[Income], expenses_before: &[Expense]) -> Money {
    net_balance(incomes_before.iter(), expenses_before.iter())
}

/// Carry-over into `period` from an unfiltered history
///
/// Only records dated strictly before the period's first day count; there
/// is no lower bound.
pub fn carry_over_into(period: &BudgetPeriod, incomes: &[Income], expenses: &[Expense]) -> Money {
    net_balance(
        incomes.iter().filter(|income| period.is_before(income.date)),
        expenses.iter().filter(|expense| period.is_before(expense.date)),
    )
}

fn net_balance<'a>(
    incomes: impl Iterator<Item = &'a Income>,
    expenses: impl Iterator<Item = &'a Expense>,
) -> Money {
    let earned: Money = incomes.map(|income| income.amount).sum();
    let spent: Money = expenses.map(|expense| expense.amount).sum();
    earned - spent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, IncomeSourceId};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn income(units: i64, on: NaiveDate) -> Income {
        Income::new(IncomeSourceId::new(), Money::from_units(units), on)
    }

    fn expense(units: i64, on: NaiveDate) -> Expense {
        Expense::new(CategoryId::new(), Money::from_units(units), on)
    }

    #[test]
    fn test_empty_history_is_zero() {
        assert_eq!(compute_carry_over(&[], &[]), Money::zero());
    }

    #[test]
    fn test_income_minus_expenses() {
        let incomes = vec![income(100, date(2024, 11, 3)), income(200, date(2024, 12, 1))];
        let expenses = vec![expense(50, date(2024, 12, 20))];
        assert_eq!(compute_carry_over(&incomes, &expenses), Money::from_units(250));
    }

    #[test]
    fn test_deficit_carries_forward() {
        let incomes = vec![income(10, date(2024, 1, 1))];
        let expenses = vec![expense(35, date(2024, 1, 2))];
        assert_eq!(compute_carry_over(&incomes, &expenses), Money::from_units(-25));
    }

    #[test]
    fn test_into_excludes_period_and_later() {
        let jan = BudgetPeriod::monthly(2025, 1);
        let incomes = vec![
            income(100, date(2019, 6, 1)),
            income(200, date(2024, 12, 31)),
            income(400, date(2025, 1, 1)),
            income(800, date(2025, 3, 1)),
        ];
        let expenses = vec![expense(50, date(2024, 12, 31)), expense(70, date(2025, 1, 1))];

        assert_eq!(carry_over_into(&jan, &incomes, &expenses), Money::from_units(250));
    }

    #[test]
    fn test_into_matches_prefiltered_compute() {
        let feb = BudgetPeriod::monthly(2025, 2);
        let incomes = vec![income(300, date(2025, 1, 10)), income(90, date(2025, 2, 2))];
        let expenses = vec![expense(120, date(2025, 1, 30)), expense(5, date(2025, 2, 28))];

        let before_incomes: Vec<Income> = incomes
            .iter()
            .filter(|i| i.date < feb.start_date())
            .cloned()
            .collect();
        let before_expenses: Vec<Expense> = expenses
            .iter()
            .filter(|e| e.date < feb.start_date())
            .cloned()
            .collect();

        assert_eq!(
            carry_over_into(&feb, &incomes, &expenses),
            compute_carry_over(&before_incomes, &before_expenses)
        );
    }
}
