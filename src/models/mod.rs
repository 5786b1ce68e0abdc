//! Core data models for CrystalBudget
//!
//! Income sources, categories with their allocation rules, and the income
//! and expense records the budget figures are computed from.

pub mod category;
pub mod ids;
pub mod income_source;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{Allocation, AllocationKind, AllocationRule, Category};
pub use ids::{CategoryId, ExpenseId, IncomeId, IncomeSourceId};
pub use income_source::{IncomeFrequency, IncomeSource};
pub use money::Money;
pub use period::BudgetPeriod;
pub use transaction::{Expense, Income};
