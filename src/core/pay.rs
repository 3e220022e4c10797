//! Weekly pay projection - pure arithmetic, no I/O.
//!
//! Malformed numeric-like input never raises: non-finite values (and, for
//! hours, negative values) degrade to 0, matching the forgiving behavior of
//! the interactive UI. No currency rounding happens here; per-weekday hours
//! are expected to already be rounded to 2 decimals by the persistence
//! boundary, and display formatting is the presentation layer's problem.

use crate::core::week::{Extra, WeekHours, finite_or_zero};
use serde::Serialize;

/// The projected payout for one week.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayBreakdown {
    /// Sum of the five weekday hour values.
    pub total_hours: f64,
    /// `total_hours * hourly_rate`.
    pub base_pay: f64,
    /// Sum of the extras' amounts.
    pub extras_total: f64,
    /// `base_pay + extras_total`.
    pub projected_total: f64,
}

/// Computes the weekly payout from hours, the rate snapshot, and extras.
#[must_use]
pub fn compute_pay(hours: &WeekHours, hourly_rate: f64, extras: &[Extra]) -> PayBreakdown {
    let total_hours = hours.total();
    let rate = finite_or_zero(hourly_rate);
    let base_pay = total_hours * rate;
    let extras_total: f64 = extras.iter().map(|e| finite_or_zero(e.amount)).sum();

    PayBreakdown {
        total_hours,
        base_pay,
        extras_total,
        projected_total: base_pay + extras_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn extra(amount: f64) -> Extra {
        Extra {
            id: "test".to_string(),
            label: "Reimbursement".to_string(),
            amount,
        }
    }

    #[test]
    fn test_projection_identity() {
        let hours = WeekHours {
            monday: 8.0,
            tuesday: 7.5,
            wednesday: 8.0,
            thursday: 6.25,
            friday: 4.0,
        };
        let extras = [extra(30.0), extra(12.5)];
        let pay = compute_pay(&hours, 21.5, &extras);

        assert!((pay.total_hours - 33.75).abs() < EPS);
        assert!((pay.base_pay - 33.75 * 21.5).abs() < EPS);
        assert!((pay.extras_total - 42.5).abs() < EPS);
        assert!(
            (pay.total_hours * 21.5 + pay.extras_total - pay.projected_total).abs() < EPS,
            "total_hours * rate + extras_total must equal projected_total"
        );
    }

    #[test]
    fn test_empty_week_is_all_zero() {
        let pay = compute_pay(&WeekHours::default(), 25.0, &[]);
        assert_eq!(pay.total_hours, 0.0);
        assert_eq!(pay.base_pay, 0.0);
        assert_eq!(pay.extras_total, 0.0);
        assert_eq!(pay.projected_total, 0.0);
    }

    #[test]
    fn test_malformed_rate_degrades_to_zero() {
        let hours = WeekHours {
            monday: 8.0,
            ..Default::default()
        };
        let pay = compute_pay(&hours, f64::NAN, &[extra(10.0)]);
        assert_eq!(pay.base_pay, 0.0);
        assert!((pay.projected_total - 10.0).abs() < EPS);
    }

    #[test]
    fn test_malformed_hours_and_extras_degrade_to_zero() {
        let hours = WeekHours {
            monday: f64::INFINITY,
            tuesday: -5.0,
            wednesday: 8.0,
            ..Default::default()
        };
        let extras = [extra(f64::NAN), extra(20.0)];
        let pay = compute_pay(&hours, 10.0, &extras);

        assert!((pay.total_hours - 8.0).abs() < EPS);
        assert!((pay.base_pay - 80.0).abs() < EPS);
        assert!((pay.extras_total - 20.0).abs() < EPS);
        assert!(pay.projected_total.is_finite());
    }

    #[test]
    fn test_negative_extras_reduce_projection() {
        let hours = WeekHours {
            monday: 10.0,
            ..Default::default()
        };
        let pay = compute_pay(&hours, 10.0, &[extra(-40.0)]);
        assert!((pay.projected_total - 60.0).abs() < EPS);
    }
}
