//! Service layer for CrystalBudget
//!
//! The budget computations are pure functions over records already windowed
//! to a period. [`BudgetService`] windows a snapshot and composes them;
//! [`PeriodService`] turns user input into periods.

pub mod allocation;
pub mod balance;
pub mod budget;
pub mod carryover;
pub mod period;
pub mod source_summary;

pub use allocation::{actual_income, resolve_category_allocation, source_figures, SourceFigures};
pub use balance::{
    compute_category_budget, compute_period_balance, BudgetStatus, CategoryBudget, PeriodBalance,
};
pub use budget::{BudgetOverview, BudgetService, CategoryBudgetRow, SourceSummaryRow};
pub use carryover::{carry_over_into, compute_carry_over};
pub use period::PeriodService;
pub use source_summary::{summarize_source, SourceSummary};
