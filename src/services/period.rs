//! Budget period service
//!
//! Resolves user-facing period references ("2025-01", "last", "March") to a
//! [`BudgetPeriod`]. "Today" is injected so every relative reference is
//! reproducible.

use chrono::{Datelike, NaiveDate};

use crate::error::{CrystalError, CrystalResult};
use crate::models::BudgetPeriod;

const MONTH_NAMES: [(&str, u32); 24] = [
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// Service for budget period resolution
#[derive(Debug, Clone, Copy)]
pub struct PeriodService {
    today: NaiveDate,
}

impl PeriodService {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The month containing today
    pub fn current_period(&self) -> BudgetPeriod {
        BudgetPeriod::containing(self.today)
    }

    /// Parse a period string or fall back to the current period
    pub fn parse_or_current(&self, period_str: Option<&str>) -> CrystalResult<BudgetPeriod> {
        match period_str {
            Some(s) => self.parse(s),
            None => Ok(self.current_period()),
        }
    }

    /// Parse a period reference
    ///
    /// Accepted forms: `2025-01`, `current`/`now`/`this`,
    /// `last`/`prev`/`previous`, `next`, and month names with an optional
    /// year (`January 2025`, `mar`).
    pub fn parse(&self, s: &str) -> CrystalResult<BudgetPeriod> {
        let s_lower = s.trim().to_lowercase();

        match s_lower.as_str() {
            "current" | "now" | "this" => return Ok(self.current_period()),
            "last" | "prev" | "previous" => return Ok(self.current_period().prev()),
            "next" => return Ok(self.current_period().next()),
            _ => {}
        }

        if let Some(period) = self.parse_month_name(&s_lower) {
            return Ok(period);
        }

        BudgetPeriod::parse(&s_lower)
            .map_err(|e| CrystalError::Validation(format!("Invalid period '{}': {}", s.trim(), e)))
    }

    /// A month name without a year means the most recent such month, so a
    /// month later than today's falls in the previous year. An explicit year
    /// outside the supported range does not match.
    fn parse_month_name(&self, s: &str) -> Option<BudgetPeriod> {
        let (name, month) = MONTH_NAMES
            .iter()
            .find(|(name, _)| s.starts_with(name))?;

        let rest = s[name.len()..].trim();
        let year = if rest.is_empty() {
            if *month > self.today.month() {
                self.today.year() - 1
            } else {
                self.today.year()
            }
        } else {
            rest.parse().ok()?
        };

        (BudgetPeriod::MIN_YEAR..=BudgetPeriod::MAX_YEAR)
            .contains(&year)
            .then(|| BudgetPeriod::monthly(year, *month))
    }
}
