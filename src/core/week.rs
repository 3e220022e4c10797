//! Week-domain types and date helpers.
//!
//! Only the five weekdays Monday through Friday are tracked; weekends are out
//! of scope. A week is identified by its Monday ("week start"), following the
//! ISO week definition, so a Sunday belongs to the week that started six days
//! earlier.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Label applied to an extra whose label was left blank.
pub const DEFAULT_EXTRA_LABEL: &str = "Reimbursement";

/// Hours worked per weekday. Absent keys deserialize to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekHours {
    #[serde(default)]
    pub monday: f64,
    #[serde(default)]
    pub tuesday: f64,
    #[serde(default)]
    pub wednesday: f64,
    #[serde(default)]
    pub thursday: f64,
    #[serde(default)]
    pub friday: f64,
}

impl WeekHours {
    /// The five per-weekday values in Monday-first order.
    #[must_use]
    pub const fn values(&self) -> [f64; 5] {
        [
            self.monday,
            self.tuesday,
            self.wednesday,
            self.thursday,
            self.friday,
        ]
    }

    /// Applies `f` to every weekday value.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            monday: f(self.monday),
            tuesday: f(self.tuesday),
            wednesday: f(self.wednesday),
            thursday: f(self.thursday),
            friday: f(self.friday),
        }
    }

    /// Total hours across the week. Each day is coerced through
    /// [`hours_or_zero`], so a malformed value degrades to 0 instead of
    /// poisoning the sum.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values().iter().copied().map(hours_or_zero).sum()
    }

    /// Rounds every weekday value to 2 decimal places, coercing malformed
    /// values to 0 first. Applied at the persistence boundary before a week
    /// is saved.
    #[must_use]
    pub fn rounded(self) -> Self {
        self.map(|v| round2(hours_or_zero(v)))
    }
}

/// An ad-hoc labeled monetary adjustment added to a week's payout outside of
/// hourly pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    /// Caller-supplied unique identifier; generated when absent.
    #[serde(default)]
    pub id: String,
    /// Human-readable label, defaulted to [`DEFAULT_EXTRA_LABEL`] when blank.
    #[serde(default)]
    pub label: String,
    /// Amount in currency units. May be negative (a deduction).
    #[serde(default)]
    pub amount: f64,
}

impl Extra {
    /// Fills in the pieces a caller may legitimately omit: a blank id gets a
    /// fresh UUID, a blank label gets the default, and a non-finite amount
    /// degrades to 0. Everything else is kept verbatim.
    #[must_use]
    pub fn normalized(self) -> Self {
        let id = if self.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            self.id
        };
        let label = if self.label.trim().is_empty() {
            DEFAULT_EXTRA_LABEL.to_string()
        } else {
            self.label
        };
        Self {
            id,
            label,
            amount: finite_or_zero(self.amount),
        }
    }
}

/// What a stored week looks like to callers: the rate snapshot, the hours,
/// and the extras in their saved order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSnapshot {
    pub hourly_rate: f64,
    pub hours: WeekHours,
    pub extras: Vec<Extra>,
}

/// Returns the Monday of the ISO week containing `date`. A Sunday maps to
/// the previous Monday.
///
/// Provided for callers building week keys; the storage layer itself never
/// normalizes and expects to be handed a Monday.
#[must_use]
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    let days_from_monday = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(days_from_monday))
        .unwrap_or(date)
}

/// Coerces a numeric-like value to 0 unless it is finite.
#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Coerces an hours value to 0 unless it is a finite non-negative number.
#[must_use]
pub fn hours_or_zero(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// Rounds to 2 decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
