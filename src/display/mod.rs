//! Display formatting for terminal output
//!
//! Budget overviews and record lists rendered as tables, plus small
//! formatting helpers.

pub mod budget;
pub mod format;
pub mod records;

pub use budget::{format_balance, format_category_budgets, format_overview, format_source_summaries};
pub use records::{describe_allocations, format_category_list, format_source_list};
