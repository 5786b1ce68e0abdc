//! Budget period representation
//!
//! A period is a calendar month. Income and expense queries for "this month"
//! use its inclusive `[start_date, end_date]` window, and carry-over sums
//! everything strictly before `start_date`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month used to window transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BudgetPeriod {
    year: i32,
    month: u32,
}

impl BudgetPeriod {
    /// Earliest year a period may fall in
    pub const MIN_YEAR: i32 = 1;
    /// Latest year a period may fall in
    pub const MAX_YEAR: i32 = 9999;

    /// Create a monthly period; `year` is clamped into
    /// `MIN_YEAR..=MAX_YEAR` and `month` into 1..=12
    pub fn monthly(year: i32, month: u32) -> Self {
        Self {
            year: year.clamp(Self::MIN_YEAR, Self::MAX_YEAR),
            month: month.clamp(1, 12),
        }
    }

    /// The period containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self::monthly(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month (inclusive)
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of the month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        let last = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year, 12, 31)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).and_then(|d| d.pred_opt())
        };
        last.unwrap_or_else(|| self.start_date())
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }

    /// Check if a date falls strictly before this period starts
    pub fn is_before(&self, date: NaiveDate) -> bool {
        date < self.start_date()
    }

    /// The following month; the last supported month is its own successor
    pub fn next(&self) -> Self {
        if self.year >= Self::MAX_YEAR && self.month == 12 {
            *self
        } else if self.month == 12 {
            Self::monthly(self.year + 1, 1)
        } else {
            Self::monthly(self.year, self.month + 1)
        }
    }

    /// The preceding month; the first supported month is its own predecessor
    pub fn prev(&self) -> Self {
        if self.year <= Self::MIN_YEAR && self.month == 1 {
            *self
        } else if self.month == 1 {
            Self::monthly(self.year - 1, 12)
        } else {
            Self::monthly(self.year, self.month - 1)
        }
    }

    /// Human-friendly label, e.g. "January 2025"
    pub fn label(&self) -> String {
        self.start_date().format("%B %Y").to_string()
    }

    /// Parse a period in `YYYY-MM` form
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(PeriodParseError::YearOutOfRange(year));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for BudgetPeriod {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for BudgetPeriod {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodParseError {
    #[error("Invalid period format: {0}")]
    InvalidFormat(String),
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),
    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),
}
