//! Unified error and result types for the crate.
//!
//! The two variants callers branch on are [`Error::Validation`] (bad caller
//! input, surfaced to the user as-is) and [`Error::Storage`] (the store is
//! unreachable or a query failed, surfaced as a generic message). A failed
//! write leaves the previously persisted state untouched since every write
//! is a single-row upsert.

use thiserror::Error;

/// All errors this crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad caller input: missing week key, non-positive rate, etc.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The underlying store is unreachable or a query failed.
    #[error("Storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),

    /// A persisted JSON column failed to (de)serialize.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error, e.g. binding the listener.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
