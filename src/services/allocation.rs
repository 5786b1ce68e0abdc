//! Allocation resolver
//!
//! Turns a category's allocation rules into one allocated amount for a
//! period, given each income source's effective figure for that period.

use std::collections::HashMap;

use crate::models::{Category, Income, IncomeSource, IncomeSourceId, Money};

/// Effective income figure per source for one period
///
/// See [`IncomeSource::effective_figure`] for how a figure is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceFigures {
    figures: HashMap<IncomeSourceId, Money>,
}

impl SourceFigures {
    pub fn new() -> Self {
        Self::default()
    }

    /// The figure for `source_id`; unknown sources count as zero
    pub fn get(&self, source_id: IncomeSourceId) -> Money {
        self.figures.get(&source_id).copied().unwrap_or_default()
    }
}

impl FromIterator<(IncomeSourceId, Money)> for SourceFigures {
    fn from_iter<I: IntoIterator<Item = (IncomeSourceId, Money)>>(iter: I) -> Self {
        Self {
            figures: iter.into_iter().collect(),
        }
    }
}

/// Sum of income amounts recorded against `source_id`
pub fn actual_income(source_id: IncomeSourceId, incomes: &[Income]) -> Money {
    incomes
        .iter()
        .filter(|income| income.source_id == source_id)
        .map(|income| income.amount)
        .sum()
}

/// Build the effective figure of every source from a period's incomes
///
/// Incomes referencing sources not in `sources` are ignored.
pub fn source_figures(sources: &[IncomeSource], period_incomes: &[Income]) -> SourceFigures {
    sources
        .iter()
        .map(|source| {
            let actual = actual_income(source.id, period_incomes);
            (source.id, source.effective_figure(actual))
        })
        .collect()
}

/// The amount allocated to `category` for the period
///
/// Each rule contributes independently: fixed amounts as is, percentages
/// against their source's figure (zero for unknown or missing sources).
/// Contributions are whole minor units, so the total does not depend on
/// rule order.
pub fn resolve_category_allocation(category: &Category, figures: &SourceFigures) -> Money {
    category
        .allocation_rules()
        .iter()
        .map(|rule| {
            let figure = rule.source.map(|id| figures.get(id)).unwrap_or_default();
            rule.kind.contribution(figure)
        })
        .sum()
}
