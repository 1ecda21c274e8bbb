//! Plain-text transaction report for non-interactive use.

use std::fmt::Write as _;

use crate::client::TransactionSource;
use crate::domain::{ExplorerError, TransactionDetails, TransactionValue};
use crate::state::{DetailsView, ErrorRenderer, errors::format_failure};
use crate::ui::details::summary_rows;
use crate::widgets::format_amount;

/// Writes rendered failures to stderr.
#[derive(Debug, Default)]
pub struct StderrRenderer;

impl ErrorRenderer for StderrRenderer {
    fn render_server_errors(&mut self, context: Option<&str>, failure: &ExplorerError) {
        eprintln!("{}", format_failure(context, failure));
    }
}

/// Fetches `txid` through a details view and renders it as text.
///
/// Returns `None` when the fetch failed; the failure has been handed to
/// `renderer`.
pub async fn fetch_report<S, R>(source: &S, txid: &str, renderer: &mut R) -> Option<String>
where
    S: TransactionSource,
    R: ErrorRenderer,
{
    let mut view = DetailsView::new();
    let token = view.begin(txid);
    let result = source.get(txid).await;
    view.apply(token, result, renderer);
    view.transaction().map(render_report)
}

/// Renders transaction details as aligned plain text.
#[must_use]
pub fn render_report(details: &TransactionDetails) -> String {
    let mut out = String::new();

    for (label, value) in summary_rows(details) {
        let _ = writeln!(out, "{label:<15}{value}");
    }

    write_rows(&mut out, "Inputs", &details.inputs);
    write_rows(&mut out, "Outputs", &details.outputs);
    out
}

fn write_rows(out: &mut String, title: &str, rows: &[TransactionValue]) {
    let _ = writeln!(out);
    let _ = writeln!(out, "{title} ({})", rows.len());

    let width = rows
        .iter()
        .map(|row| row.address.chars().count())
        .max()
        .unwrap_or(0);

    for row in rows {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>20}",
            row.address,
            format_amount(row.value)
        );
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeSource, RecordingRenderer, TransactionMother};

    #[test]
    fn test_render_report() {
        let details = TransactionDetails::from(TransactionMother::explorer_sample());
        insta::assert_snapshot!(render_report(&details), @r"
        Transaction    92c51e4fe89466faa734d6207a7ef6115fa1dd33f7156b006fafc6bb85a79eb8
        Block          000003dc4c2fc449dededaaad6efc33ce1b64b88a060652dc47edc63d6d6b524
        Time           Mon, 05 Mar 2018 18:57:50 UTC
        Confirmations  5,347
        Size           225 bytes
        Total input    10.00000000
        Total output   9.99990000
        Fee            0.00010000

        Inputs (1)
          XiA (2)           10.00000000

        Outputs (2)
          XoB            5.99990000
          XoC            4.00000000
        ");
    }

    #[tokio::test]
    async fn test_fetch_report_success() {
        let source = FakeSource::with_transactions(vec![TransactionMother::explorer_sample()]);
        let mut renderer = RecordingRenderer::default();
        let id = TransactionMother::explorer_sample().id;

        let report = fetch_report(&source, &id, &mut renderer).await.unwrap();
        assert!(report.contains("XiA (2)"));
        assert!(renderer.calls.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_report_failure_goes_to_renderer() {
        let source = FakeSource::default();
        let mut renderer = RecordingRenderer::default();

        let report = fetch_report(&source, "missing", &mut renderer).await;
        assert!(report.is_none());
        assert_eq!(
            renderer.calls,
            vec![(None, "transaction 'missing' not found".to_string())]
        );
    }
}
