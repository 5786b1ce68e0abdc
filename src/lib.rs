//! CrystalBudget - budget allocation and balance engine
//!
//! Income sources feed spending categories through allocation rules (fixed
//! amounts or percentages of a source). For a monthly period this crate
//! computes each category's allocated/spent/remaining figures, each source's
//! remaining income or debt, and the period balance including the carry-over
//! from earlier months.
//!
//! # Architecture
//!
//! - `models`: records (income sources, categories, incomes, expenses) and
//!   the `Money` and `BudgetPeriod` value types
//! - `services`: the pure budget computations plus the period and budget
//!   services that compose them
//! - `storage`: the JSON snapshot store and legacy layout migration
//! - `config`: data directory resolution and user settings
//! - `display`, `export`, `cli`: terminal tables, report export, commands
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use crystal_budget::models::{Allocation, BudgetPeriod, Category, Income, IncomeSource, Money};
//! use crystal_budget::services::BudgetService;
//! use crystal_budget::storage::Snapshot;
//!
//! let salary = IncomeSource::new("Salary");
//! let food = Category::new("Food").with_allocation(Allocation::percent(salary.id, 20.0));
//! let paid = Income::new(
//!     salary.id,
//!     Money::from_units(3000),
//!     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//! );
//!
//! let snapshot = Snapshot {
//!     incomes: vec![paid],
//!     income_sources: vec![salary],
//!     categories: vec![food],
//!     ..Snapshot::default()
//! };
//!
//! let overview = BudgetService::new(&snapshot).overview(&BudgetPeriod::monthly(2025, 1));
//! assert_eq!(overview.categories[0].budget.allocated, Money::from_units(600));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{CrystalError, CrystalResult};
