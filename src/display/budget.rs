//! Budget overview display
//!
//! Renders a [`BudgetOverview`] as terminal tables.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_percentage, separator, status_marker, truncate, usage_bar};
use crate::config::Settings;
use crate::services::{BudgetOverview, CategoryBudgetRow, PeriodBalance, SourceSummaryRow};

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "")]
    bar: String,
}

impl CategoryLine {
    fn new(row: &CategoryBudgetRow, symbol: &str) -> Self {
        Self {
            marker: status_marker(row.status),
            name: format!("{} {}", row.icon, truncate(&row.name, 24)),
            allocated: row.budget.allocated.format_with_symbol(symbol),
            spent: row.budget.spent.format_with_symbol(symbol),
            remaining: row.budget.remaining.format_with_symbol(symbol),
            used: format_percentage(row.usage_percent),
            bar: usage_bar(row.usage_percent),
        }
    }
}

#[derive(Tabled)]
struct SourceLine {
    #[tabled(rename = "Source")]
    name: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Allocated")]
    allocated: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Debt")]
    debt: String,
}

impl SourceLine {
    fn new(row: &SourceSummaryRow, symbol: &str) -> Self {
        let summary = &row.summary;
        let income = if summary.actual_income.is_zero() && !summary.total_income.is_zero() {
            format!("{} (expected)", summary.total_income.format_with_symbol(symbol))
        } else {
            summary.total_income.format_with_symbol(symbol)
        };

        Self {
            name: truncate(&row.name, 24),
            income,
            allocated: summary.total_allocated.format_with_symbol(symbol),
            spent: summary.total_spent.format_with_symbol(symbol),
            remaining: summary.remaining.format_with_symbol(symbol),
            debt: if summary.is_in_debt() {
                summary.debt.format_with_symbol(symbol)
            } else {
                "-".to_string()
            },
        }
    }
}

/// Format the headline balances of a period
pub fn format_balance(balance: &PeriodBalance, symbol: &str) -> String {
    let lines = [
        ("Income", balance.month_income),
        ("Expenses", balance.total_expenses),
        ("Month balance", balance.month_balance),
        ("Carry-over", balance.carry_over),
        ("Total balance", balance.total_balance),
    ];

    let mut output = String::new();
    for (label, amount) in lines {
        output.push_str(&format!(
            "  {:<15} {:>14}\n",
            label,
            amount.format_with_symbol(symbol)
        ));
    }
    output
}

/// Format the category table of an overview
pub fn format_category_budgets(overview: &BudgetOverview, settings: &Settings) -> String {
    let rows: Vec<CategoryLine> = overview
        .categories
        .iter()
        .filter(|row| {
            !settings.hide_empty_categories
                || !(row.budget.allocated.is_zero() && row.budget.spent.is_zero())
        })
        .map(|row| CategoryLine::new(row, &settings.currency_symbol))
        .collect();

    if rows.is_empty() {
        return "No categories found.\n\nRun 'crystal category add' to create one.".to_string();
    }

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format the per-source table of an overview
pub fn format_source_summaries(overview: &BudgetOverview, settings: &Settings) -> String {
    if overview.sources.is_empty() {
        return "No income sources found.\n\nRun 'crystal source add' to create one.".to_string();
    }

    let rows: Vec<SourceLine> = overview
        .sources
        .iter()
        .map(|row| SourceLine::new(row, &settings.currency_symbol))
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Format a full overview: balances, categories and a short footer
pub fn format_overview(overview: &BudgetOverview, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("Budget for {}\n", overview.period.label()));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format_balance(&overview.balance, symbol));
    output.push('\n');
    output.push_str(&format_category_budgets(overview, settings));
    output.push('\n');

    let over = overview.over_budget_count();
    output.push_str(&format!(
        "\nAllocated {}, spent {}",
        overview.total_allocated().format_with_symbol(symbol),
        overview.total_spent().format_with_symbol(symbol),
    ));
    if over > 0 {
        output.push_str(&format!(
            "\n{} categor{} over budget",
            over,
            if over == 1 { "y" } else { "ies" }
        ));
    }
    output.push('\n');

    output
}
