//! Income and expense records
//!
//! Incomes are attributed to an income source, expenses to a category. Both
//! carry a calendar date used to window them into budget periods.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, ExpenseId, IncomeId, IncomeSourceId};
use super::money::Money;

/// Money received from an income source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub source_id: IncomeSourceId,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Income {
    pub fn new(source_id: IncomeSourceId, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: IncomeId::new(),
            source_id,
            amount,
            date,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +{}", self.date, self.amount)
    }
}

/// Money spent against a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub category_id: CategoryId,
    pub amount: Money,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Expense {
    pub fn new(category_id: CategoryId, amount: Money, date: NaiveDate) -> Self {
        Self {
            id: ExpenseId::new(),
            category_id,
            amount,
            date,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}", self.date, self.amount)
    }
}

/// Validation errors for incomes and expenses
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionValidationError {
    #[error("Amount cannot be negative")]
    NegativeAmount,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let income = Income::new(IncomeSourceId::new(), Money::from_cents(-1), jan(1));
        assert_eq!(income.validate(), Err(TransactionValidationError::NegativeAmount));

        let expense = Expense::new(CategoryId::new(), Money::from_cents(-1), jan(1));
        assert_eq!(expense.validate(), Err(TransactionValidationError::NegativeAmount));
    }

    #[test]
    fn test_description_is_optional_on_the_wire() {
        let expense = Expense::new(CategoryId::new(), Money::from_units(12), jan(5));
        let json = serde_json::to_value(&expense).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["date"], "2025-01-05");

        let with_note = expense.with_description("groceries");
        let back: Expense =
            serde_json::from_str(&serde_json::to_string(&with_note).unwrap()).unwrap();
        assert_eq!(back.description.as_deref(), Some("groceries"));
    }

    #[test]
    fn test_display() {
        let income = Income::new(IncomeSourceId::new(), Money::from_units(300), jan(2));
        assert_eq!(income.to_string(), "2025-01-02 +300.00");
    }
}
