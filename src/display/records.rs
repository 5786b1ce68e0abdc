//! Income source and category lists

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{AllocationKind, AllocationRule, Category, IncomeSource};
use crate::storage::Snapshot;

#[derive(Tabled)]
struct SourceListLine {
    #[tabled(rename = "Source")]
    name: String,
    #[tabled(rename = "Expected")]
    expected: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "ID")]
    id: String,
}

#[derive(Tabled)]
struct CategoryListLine {
    #[tabled(rename = "Category")]
    name: String,
    #[tabled(rename = "Allocations")]
    allocations: String,
    #[tabled(rename = "ID")]
    id: String,
}

/// Format income sources as a table
pub fn format_source_list(sources: &[IncomeSource], symbol: &str) -> String {
    if sources.is_empty() {
        return "No income sources found.".to_string();
    }

    let rows = sources.iter().map(|source| SourceListLine {
        name: source.name.clone(),
        expected: source
            .expected_amount
            .map(|amount| amount.format_with_symbol(symbol))
            .unwrap_or_else(|| "-".to_string()),
        frequency: source
            .frequency
            .map(|f| f.to_string())
            .unwrap_or_else(|| "-".to_string()),
        id: source.id.to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Describe a category's allocation rules, naming their sources
pub fn describe_allocations(category: &Category, snapshot: &Snapshot, symbol: &str) -> String {
    let rules = category.allocation_rules();
    if rules.is_empty() {
        return "none".to_string();
    }

    rules
        .iter()
        .map(|rule| describe_rule(rule, snapshot, symbol))
        .collect::<Vec<_>>()
        .join(", ")
}

fn describe_rule(rule: &AllocationRule, snapshot: &Snapshot, symbol: &str) -> String {
    let amount = match rule.kind {
        AllocationKind::Amount(amount) => amount.format_with_symbol(symbol),
        AllocationKind::Percent(percent) => format!("{}%", percent),
    };

    match rule.source {
        Some(id) => {
            let name = snapshot
                .source(id)
                .map(|source| source.name.as_str())
                .unwrap_or("unknown source");
            format!("{} from {}", amount, name)
        }
        None => format!("{} (unlinked)", amount),
    }
}

/// Format categories with their allocation rules as a table
pub fn format_category_list(snapshot: &Snapshot, symbol: &str) -> String {
    if snapshot.categories.is_empty() {
        return "No categories found.".to_string();
    }

    let rows = snapshot.categories.iter().map(|category| CategoryListLine {
        name: format!("{} {}", category.icon, category.name),
        allocations: describe_allocations(category, snapshot, symbol),
        id: category.id.to_string(),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}
