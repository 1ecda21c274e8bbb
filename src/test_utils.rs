//! Shared test utilities and Mother pattern factories.
#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use ratatui::buffer::Buffer;

use crate::client::TransactionSource;
use crate::domain::{ExplorerError, Transaction, TransactionValue};
use crate::state::ErrorRenderer;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    /// A transaction whose rows get distinct addresses (`Xin0`, `Xout0`, ...).
    #[must_use]
    pub fn with_values(id: &str, inputs: &[f64], outputs: &[f64]) -> Transaction {
        let rows = |prefix: &str, values: &[f64]| -> Vec<TransactionValue> {
            values
                .iter()
                .enumerate()
                .map(|(i, value)| TransactionValue::new(format!("{prefix}{i}"), *value))
                .collect()
        };
        Self::with_rows(id, rows("Xin", inputs), rows("Xout", outputs))
    }

    #[must_use]
    pub fn with_rows(
        id: &str,
        input: Vec<TransactionValue>,
        output: Vec<TransactionValue>,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            input: Some(input),
            output,
            ..Transaction::default()
        }
    }

    /// A fully populated transaction with a repeated input address.
    #[must_use]
    pub fn explorer_sample() -> Transaction {
        Transaction {
            id: "92c51e4fe89466faa734d6207a7ef6115fa1dd33f7156b006fafc6bb85a79eb8".to_string(),
            blockhash: Some(
                "000003dc4c2fc449dededaaad6efc33ce1b64b88a060652dc47edc63d6d6b524".to_string(),
            ),
            time: Some(1_520_276_270),
            size: Some(225),
            confirmations: Some(5347),
            input: Some(vec![
                TransactionValue::new("XiA", 6.0),
                TransactionValue::new("XiA", 4.0),
            ]),
            output: vec![
                TransactionValue::new("XoB", 5.9999),
                TransactionValue::new("XoC", 4.0),
            ],
        }
    }
}

// ============================================================================
// Fakes
// ============================================================================

/// In-memory transaction source. Unknown ids fail with `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct FakeSource {
    transactions: Arc<HashMap<String, Transaction>>,
}

impl FakeSource {
    #[must_use]
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        let map = transactions
            .into_iter()
            .map(|tx| (tx.id.clone(), tx))
            .collect();
        Self {
            transactions: Arc::new(map),
        }
    }
}

impl TransactionSource for FakeSource {
    fn get(&self, txid: &str) -> impl Future<Output = Result<Transaction, ExplorerError>> + Send {
        let result = self
            .transactions
            .get(txid)
            .cloned()
            .ok_or_else(|| ExplorerError::not_found(txid));
        async move { result }
    }
}

/// Records every failure it is asked to render.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<(Option<String>, String)>,
}

impl ErrorRenderer for RecordingRenderer {
    fn render_server_errors(&mut self, context: Option<&str>, failure: &ExplorerError) {
        self.calls
            .push((context.map(str::to_string), failure.to_string()));
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Flattens a buffer into lines of text.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
