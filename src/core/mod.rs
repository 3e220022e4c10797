//! Core business logic - framework-agnostic settings, weekly-log, pay, and
//! discount operations. Nothing in here knows about HTTP; storage functions
//! take a `DatabaseConnection`, the two calculators are pure.

/// Discount and vendor-commission calculator
pub mod discount;
/// Weekly pay projection
pub mod pay;
/// Hourly-rate setting access
pub mod settings;
/// Week-domain types and date helpers
pub mod week;
/// Weekly log access
pub mod weekly_log;
