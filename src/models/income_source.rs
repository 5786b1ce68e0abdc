//! Income source model
//!
//! An income source ("Salary", "Freelance") is what category allocations
//! are expressed against. It may carry an expected periodic amount that
//! stands in for actual income until any income is recorded in a period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeSourceId;
use super::money::Money;

/// How often an income source is expected to pay out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeFrequency {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Yearly,
    Once,
}

impl IncomeFrequency {
    pub fn all() -> &'static [Self] {
        &[
            Self::Weekly,
            Self::Biweekly,
            Self::Monthly,
            Self::Quarterly,
            Self::Yearly,
            Self::Once,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
            Self::Once => "once",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::all().iter().copied().find(|f| f.as_str() == s)
    }
}

impl fmt::Display for IncomeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_color() -> String {
    "#3b82f6".to_string()
}

/// A named stream of income
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeSource {
    pub id: IncomeSourceId,

    pub name: String,

    /// Display color tag
    #[serde(default = "default_color")]
    pub color: String,

    /// Expected amount per period, used when no income is recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_amount: Option<Money>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<IncomeFrequency>,

    /// When the next payment is expected to arrive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_date: Option<NaiveDate>,
}

impl IncomeSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: IncomeSourceId::new(),
            name: name.into(),
            color: default_color(),
            expected_amount: None,
            frequency: None,
            expected_date: None,
        }
    }

    /// Builder-style setter for the expected amount
    pub fn with_expected(mut self, amount: Money) -> Self {
        self.expected_amount = Some(amount);
        self
    }

    pub fn with_frequency(mut self, frequency: IncomeFrequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// The figure allocations are computed against for a period
    ///
    /// Any positive actual income fully replaces the expected amount; the
    /// expected amount (or zero) is used only when nothing was received.
    pub fn effective_figure(&self, actual_income: Money) -> Money {
        if actual_income.is_positive() {
            actual_income
        } else {
            self.expected_amount.unwrap_or_default()
        }
    }

    pub fn validate(&self) -> Result<(), IncomeSourceValidationError> {
        if self.name.trim().is_empty() {
            return Err(IncomeSourceValidationError::EmptyName);
        }
        if self.name.len() > 50 {
            return Err(IncomeSourceValidationError::NameTooLong(self.name.len()));
        }
        if self.expected_amount.is_some_and(|a| a.is_negative()) {
            return Err(IncomeSourceValidationError::NegativeExpectedAmount);
        }
        Ok(())
    }
}

impl fmt::Display for IncomeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for income sources
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IncomeSourceValidationError {
    #[error("Income source name cannot be empty")]
    EmptyName,
    #[error("Income source name too long ({0} chars, max 50)")]
    NameTooLong(usize),
    #[error("Expected income cannot be negative")]
    NegativeExpectedAmount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actual_income_replaces_expected() {
        let source = IncomeSource::new("Salary").with_expected(Money::from_units(1000));
        assert_eq!(
            source.effective_figure(Money::from_units(300)),
            Money::from_units(300)
        );
    }

    #[test]
    fn test_expected_used_when_nothing_received() {
        let source = IncomeSource::new("Salary").with_expected(Money::from_units(1000));
        assert_eq!(source.effective_figure(Money::zero()), Money::from_units(1000));

        let no_expectation = IncomeSource::new("Gifts");
        assert_eq!(no_expectation.effective_figure(Money::zero()), Money::zero());
    }

    #[test]
    fn test_validation() {
        assert!(IncomeSource::new("Salary").validate().is_ok());
        assert_eq!(
            IncomeSource::new("  ").validate(),
            Err(IncomeSourceValidationError::EmptyName)
        );
        assert_eq!(
            IncomeSource::new("Salary")
                .with_expected(Money::from_cents(-1))
                .validate(),
            Err(IncomeSourceValidationError::NegativeExpectedAmount)
        );
    }

    #[test]
    fn test_frequency_parse() {
        assert_eq!(IncomeFrequency::parse("Monthly"), Some(IncomeFrequency::Monthly));
        assert_eq!(IncomeFrequency::parse("fortnightly"), None);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id":"550e8400-e29b-41d4-a716-446655440000","name":"Salary"}"#;
        let source: IncomeSource = serde_json::from_str(json).unwrap();
        assert_eq!(source.color, "#3b82f6");
        assert!(source.expected_amount.is_none());
        assert!(source.frequency.is_none());
    }
}
