//! Domain types for the txlens transaction viewer.
//!
//! # Module Organization
//!
//! - [`error`] - Error types for explorer requests
//! - [`transaction`] - Transactions, row collapsing and fee calculation

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{ExplorerError, ServerError};

pub use transaction::{
    Transaction, TransactionDetails, TransactionValue, collapse_repeated_rows, format_timestamp,
};
