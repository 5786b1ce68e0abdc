//! Category and allocation models
//!
//! A category's budget is defined by allocation rules tied to income
//! sources: a fixed amount, or a percentage of what the source brings in.
//! Older records carry a single rule in flat legacy fields instead of the
//! allocation list; [`Category::allocation_rules`] is the one place those two
//! shapes are reconciled.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, IncomeSourceId};
use super::money::Money;

/// How an allocation derives its amount
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum AllocationKind {
    /// A fixed amount, independent of income
    Amount(Money),
    /// A percentage (conventionally 0-100) of the source's effective figure
    Percent(f64),
}

impl AllocationKind {
    /// The amount this rule allocates given its source's effective figure
    pub fn contribution(&self, source_figure: Money) -> Money {
        match *self {
            Self::Amount(amount) => amount,
            Self::Percent(percent) => source_figure.percent(percent),
        }
    }
}

impl fmt::Display for AllocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Amount(amount) => write!(f, "{}", amount),
            Self::Percent(percent) => write!(f, "{}%", percent),
        }
    }
}

/// One allocation rule linking a category to an income source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub income_source_id: IncomeSourceId,
    pub kind: AllocationKind,
}

impl Allocation {
    pub fn amount(income_source_id: IncomeSourceId, amount: Money) -> Self {
        Self {
            income_source_id,
            kind: AllocationKind::Amount(amount),
        }
    }

    pub fn percent(income_source_id: IncomeSourceId, percent: f64) -> Self {
        Self {
            income_source_id,
            kind: AllocationKind::Percent(percent),
        }
    }
}

/// Normalized allocation rule
///
/// Unlike [`Allocation`], the source is optional: a legacy fixed amount with
/// no linked source still counts toward the category's budget but toward no
/// source's summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationRule {
    pub source: Option<IncomeSourceId>,
    pub kind: AllocationKind,
}

impl AllocationRule {
    pub fn references(&self, source_id: IncomeSourceId) -> bool {
        self.source == Some(source_id)
    }
}

impl From<&Allocation> for AllocationRule {
    fn from(allocation: &Allocation) -> Self {
        Self {
            source: Some(allocation.income_source_id),
            kind: allocation.kind,
        }
    }
}

fn default_icon() -> String {
    "📦".to_string()
}

/// A spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    #[serde(default = "default_icon")]
    pub icon: String,

    /// Allocation rules; when non-empty the legacy fields are ignored
    #[serde(default)]
    pub allocations: Vec<Allocation>,

    /// Legacy: single linked income source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_source_id: Option<IncomeSourceId>,

    /// Legacy: fixed allocation amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation_amount: Option<Money>,

    /// Legacy: percentage of the linked source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation_percent: Option<f64>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            icon: default_icon(),
            allocations: Vec::new(),
            linked_source_id: None,
            allocation_amount: None,
            allocation_percent: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_allocation(mut self, allocation: Allocation) -> Self {
        self.allocations.push(allocation);
        self
    }

    /// Whether any of the flat legacy fields are populated
    pub fn has_legacy_fields(&self) -> bool {
        self.linked_source_id.is_some()
            || self.allocation_amount.is_some()
            || self.allocation_percent.is_some()
    }

    /// The category's allocation rules in normalized form
    ///
    /// A non-empty allocation list wins outright. Otherwise the legacy
    /// fields yield at most one rule: a fixed amount if set, else a
    /// percentage of the linked source, else a zero amount that still
    /// marks the category as linked to that source.
    pub fn allocation_rules(&self) -> Vec<AllocationRule> {
        if !self.allocations.is_empty() {
            return self.allocations.iter().map(AllocationRule::from).collect();
        }

        let kind = match (self.allocation_amount, self.allocation_percent, self.linked_source_id) {
            (Some(amount), _, _) => AllocationKind::Amount(amount),
            (None, Some(percent), Some(_)) => AllocationKind::Percent(percent),
            (None, _, Some(_)) => AllocationKind::Amount(Money::zero()),
            (None, _, None) => return Vec::new(),
        };

        vec![AllocationRule {
            source: self.linked_source_id,
            kind,
        }]
    }

    /// Whether any rule of this category references `source_id`, including
    /// rules that allocate nothing
    pub fn is_linked_to(&self, source_id: IncomeSourceId) -> bool {
        self.allocation_rules()
            .iter()
            .any(|rule| rule.references(source_id))
    }

    /// Rewrite legacy fields into the allocation list where possible
    ///
    /// Returns true when the record changed. A legacy fixed amount with no
    /// linked source has no allocation equivalent and is left as is.
    pub fn migrate_legacy(&mut self) -> bool {
        if !self.has_legacy_fields() {
            return false;
        }

        if self.allocations.is_empty() {
            let Some(source_id) = self.linked_source_id else {
                return false;
            };
            let Some(rule) = self.allocation_rules().into_iter().next() else {
                return false;
            };
            self.allocations.push(Allocation {
                income_source_id: source_id,
                kind: rule.kind,
            });
        }

        self.linked_source_id = None;
        self.allocation_amount = None;
        self.allocation_percent = None;
        true
    }

    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        for allocation in &self.allocations {
            match allocation.kind {
                AllocationKind::Amount(amount) if amount.is_negative() => {
                    return Err(CategoryValidationError::NegativeAllocation);
                }
                AllocationKind::Percent(percent) if !percent.is_finite() || percent < 0.0 => {
                    return Err(CategoryValidationError::InvalidPercent(percent.to_string()));
                }
                _ => {}
            }
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryValidationError {
    #[error("Category name cannot be empty")]
    EmptyName,
    #[error("Category name too long ({0} chars, max 50)")]
    NameTooLong(usize),
    #[error("Allocation amount cannot be negative")]
    NegativeAllocation,
    #[error("Allocation percent must be a non-negative number, got {0}")]
    InvalidPercent(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_list_wins_over_legacy() {
        let source = IncomeSourceId::new();
        let mut category = Category::new("Food")
            .with_allocation(Allocation::amount(source, Money::from_units(500)));
        category.allocation_amount = Some(Money::from_units(9999));

        let rules = category.allocation_rules();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].kind, AllocationKind::Amount(Money::from_units(500)));
    }

    #[test]
    fn test_legacy_amount_beats_percent() {
        let source = IncomeSourceId::new();
        let mut category = Category::new("Rent");
        category.linked_source_id = Some(source);
        category.allocation_amount = Some(Money::from_units(800));
        category.allocation_percent = Some(30.0);

        let rules = category.allocation_rules();
        assert_eq!(
            rules,
            vec![AllocationRule {
                source: Some(source),
                kind: AllocationKind::Amount(Money::from_units(800)),
            }]
        );
    }

    #[test]
    fn test_legacy_percent_requires_linked_source() {
        let mut category = Category::new("Fun");
        category.allocation_percent = Some(10.0);
        assert!(category.allocation_rules().is_empty());

        let source = IncomeSourceId::new();
        category.linked_source_id = Some(source);
        assert_eq!(
            category.allocation_rules()[0].kind,
            AllocationKind::Percent(10.0)
        );
    }

    #[test]
    fn test_legacy_link_without_amount_is_still_linked() {
        let source = IncomeSourceId::new();
        let mut category = Category::new("Misc");
        category.linked_source_id = Some(source);

        assert!(category.is_linked_to(source));
        assert_eq!(
            category.allocation_rules()[0].kind,
            AllocationKind::Amount(Money::zero())
        );
    }

    #[test]
    fn test_zero_value_allocation_links() {
        let source = IncomeSourceId::new();
        let category = Category::new("Gifts").with_allocation(Allocation::percent(source, 0.0));
        assert!(category.is_linked_to(source));
        assert!(!category.is_linked_to(IncomeSourceId::new()));
    }

    #[test]
    fn test_migrate_linked_legacy() {
        let source = IncomeSourceId::new();
        let mut category = Category::new("Rent");
        category.linked_source_id = Some(source);
        category.allocation_percent = Some(25.0);
        let before = category.allocation_rules();

        assert!(category.migrate_legacy());
        assert!(!category.has_legacy_fields());
        assert_eq!(category.allocations, vec![Allocation::percent(source, 25.0)]);
        assert_eq!(category.allocation_rules(), before);
    }

    #[test]
    fn test_migrate_clears_shadowed_legacy_fields() {
        let source = IncomeSourceId::new();
        let mut category = Category::new("Food")
            .with_allocation(Allocation::amount(source, Money::from_units(500)));
        category.allocation_amount = Some(Money::from_units(9999));

        assert!(category.migrate_legacy());
        assert_eq!(category.allocations.len(), 1);
        assert!(category.allocation_amount.is_none());
    }

    #[test]
    fn test_migrate_leaves_unlinked_amount() {
        let mut category = Category::new("Savings");
        category.allocation_amount = Some(Money::from_units(100));

        assert!(!category.migrate_legacy());
        assert_eq!(category.allocation_amount, Some(Money::from_units(100)));
    }

    #[test]
    fn test_validation() {
        let source = IncomeSourceId::new();
        assert!(Category::new("Food").validate().is_ok());
        assert_eq!(
            Category::new("").validate(),
            Err(CategoryValidationError::EmptyName)
        );
        assert_eq!(
            Category::new("Food")
                .with_allocation(Allocation::amount(source, Money::from_cents(-1)))
                .validate(),
            Err(CategoryValidationError::NegativeAllocation)
        );
        assert!(Category::new("Food")
            .with_allocation(Allocation::percent(source, f64::NAN))
            .validate()
            .is_err());
    }

    #[test]
    fn test_allocation_wire_format() {
        let source: IncomeSourceId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let json = serde_json::to_value(Allocation::percent(source, 20.0)).unwrap();
        assert_eq!(json["kind"]["type"], "percent");
        assert_eq!(json["kind"]["value"], 20.0);

        let amount: AllocationKind =
            serde_json::from_str(r#"{"type":"amount","value":150000}"#).unwrap();
        assert_eq!(amount, AllocationKind::Amount(Money::from_units(1500)));
    }
}
