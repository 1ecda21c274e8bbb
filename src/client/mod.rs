//! HTTP clients for the block explorer API.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{ExplorerClient, HttpConfig};
//!
//! let client = ExplorerClient::new("https://xsnexplorer.io/api", HttpConfig::default())?;
//! let tx = client.get_transaction(txid).await?;
//! ```

pub mod explorer;
pub mod http;

// ============================================================================
// Re-exports
// ============================================================================

pub use explorer::{ExplorerClient, TransactionSource};
pub use http::HttpConfig;
