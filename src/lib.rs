//! `paylog` - a personal weekly pay tracker and discount calculator
//!
//! This crate tracks hours worked per weekday, ad-hoc reimbursements
//! ("extras"), and a single hourly rate, and computes a projected weekly
//! payout from them. A second, stateless calculator turns a
//! price/tax/discount/vendor-price tuple into a discount breakdown with a
//! signed vendor-commission percentage. Everything is served over a small
//! JSON HTTP API backed by SQLite.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::dbg_macro,
    clippy::exit,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// HTTP API - router, state, and handlers for the REST surface
pub mod api;
/// Configuration management for database and application settings
pub mod config;
/// Core business logic - framework-agnostic settings, weekly-log, pay, and
/// discount operations
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;
