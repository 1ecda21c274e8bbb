//! Transaction types, row collapsing and fee calculation.
//!
//! A [`Transaction`] is what the explorer backend returns. The view never
//! shows it directly: it is turned into a [`TransactionDetails`], where input
//! and output rows that share an address are merged into one row.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

// ============================================================================
// Helper Functions
// ============================================================================

/// Format a Unix timestamp for display.
#[must_use]
pub fn format_timestamp(timestamp_secs: u64) -> String {
    if timestamp_secs == 0 {
        return "Timestamp not available".to_string();
    }

    i64::try_from(timestamp_secs)
        .ok()
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        .map_or_else(
            || "Timestamp not available".to_string(),
            |datetime| datetime.format("%a, %d %b %Y %H:%M:%S UTC").to_string(),
        )
}

// ============================================================================
// Transaction Value
// ============================================================================

/// One input or output row: an address and the amount it sent or received.
///
/// Rows are not validated. A missing address decodes as the empty string and
/// a missing value as zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionValue {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub value: f64,
}

impl TransactionValue {
    #[must_use]
    pub fn new(address: impl Into<String>, value: f64) -> Self {
        Self {
            address: address.into(),
            value,
        }
    }
}

// ============================================================================
// Transaction
// ============================================================================

/// A transaction as served by `GET /transactions/{txid}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction id.
    pub id: String,
    /// Hash of the containing block.
    #[serde(default)]
    pub blockhash: Option<String>,
    /// Block time in Unix seconds.
    #[serde(default)]
    pub time: Option<u64>,
    /// Serialized size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub confirmations: Option<u64>,
    /// Spent rows. Coinbase transactions have none; the backend may send
    /// `null`, `[]` or omit the field.
    #[serde(default)]
    pub input: Option<Vec<TransactionValue>>,
    #[serde(default)]
    pub output: Vec<TransactionValue>,
}

impl Transaction {
    /// Sum of input values. Absent and empty inputs both sum to zero.
    #[must_use]
    pub fn total_input(&self) -> f64 {
        self.input.as_deref().map_or(0.0, sum_values)
    }

    #[must_use]
    pub fn total_output(&self) -> f64 {
        sum_values(&self.output)
    }

    /// Fee paid by the transaction, floored at zero.
    ///
    /// Coinbase transactions, or malformed ones whose outputs exceed their
    /// inputs, report a fee of 0.
    #[must_use]
    pub fn fee(&self) -> f64 {
        fee_from_totals(self.total_input(), self.total_output())
    }
}

fn sum_values(rows: &[TransactionValue]) -> f64 {
    rows.iter().map(|row| row.value).fold(0.0, |acc, v| acc + v)
}

fn fee_from_totals(total_input: f64, total_output: f64) -> f64 {
    (total_input - total_output).max(0.0)
}

// ============================================================================
// Row Collapsing
// ============================================================================

/// Merges rows sharing an address into one row per address.
///
/// The result is sorted by address. Merged rows carry the summed value and
/// the address gets a `" (N)"` suffix when N rows were merged.
#[must_use]
pub fn collapse_repeated_rows(rows: &[TransactionValue]) -> Vec<TransactionValue> {
    if rows.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<&TransactionValue> = rows.iter().collect();
    sorted.sort_by(|a, b| compare_addresses(&a.address, &b.address));

    let mut collapsed = Vec::new();
    let mut current = sorted[0].address.as_str();
    let mut sum = 0.0;
    let mut count = 0usize;

    for row in sorted {
        if row.address != current {
            collapsed.push(accumulated_row(current, sum, count));
            current = row.address.as_str();
            sum = 0.0;
            count = 0;
        }
        sum += row.value;
        count += 1;
    }
    collapsed.push(accumulated_row(current, sum, count));

    collapsed
}

fn compare_addresses(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

fn accumulated_row(address: &str, value: f64, count: usize) -> TransactionValue {
    let address = if count > 1 {
        format!("{address} ({count})")
    } else {
        address.to_string()
    };
    TransactionValue { address, value }
}

// ============================================================================
// Transaction Details
// ============================================================================

/// Display record built from a fetched [`Transaction`].
///
/// The fetched transaction is left untouched; the collapsed rows live here.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDetails {
    pub id: String,
    pub blockhash: Option<String>,
    pub time: Option<u64>,
    pub size: Option<u64>,
    pub confirmations: Option<u64>,
    pub inputs: Vec<TransactionValue>,
    pub outputs: Vec<TransactionValue>,
    total_input: f64,
    total_output: f64,
}

impl TransactionDetails {
    #[must_use]
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            id: tx.id.clone(),
            blockhash: tx.blockhash.clone(),
            time: tx.time,
            size: tx.size,
            confirmations: tx.confirmations,
            inputs: collapse_repeated_rows(tx.input.as_deref().unwrap_or_default()),
            outputs: collapse_repeated_rows(&tx.output),
            total_input: tx.total_input(),
            total_output: tx.total_output(),
        }
    }

    #[must_use]
    pub fn total_input(&self) -> f64 {
        self.total_input
    }

    #[must_use]
    pub fn total_output(&self) -> f64 {
        self.total_output
    }

    #[must_use]
    pub fn fee(&self) -> f64 {
        fee_from_totals(self.total_input, self.total_output)
    }

    /// `true` when the transaction spends nothing (coinbase).
    #[must_use]
    pub fn is_coinbase(&self) -> bool {
        self.inputs.is_empty()
    }

    #[must_use]
    pub fn formatted_time(&self) -> String {
        format_timestamp(self.time.unwrap_or(0))
    }
}

impl From<Transaction> for TransactionDetails {
    fn from(tx: Transaction) -> Self {
        Self::from_transaction(&tx)
    }
}

// ============================================================================
// Tests
// ============================================================================
