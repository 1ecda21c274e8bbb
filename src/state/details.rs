//! Transaction details view lifecycle.
//!
//! ```text
//!   Idle ──begin──▶ Loading ──apply(Ok)──▶ Loaded
//!                     ▲  │
//!                     │  └──apply(Err)──▶ Failed
//!                     └────── begin (from any state) ──┘
//! ```
//!
//! Every route emission calls [`DetailsView::begin`], which issues a new
//! [`RequestToken`]. Only the completion carrying the latest token is
//! applied; older ones are dropped.

use crate::domain::{ExplorerError, Transaction, TransactionDetails};

use super::errors::ErrorRenderer;

// ============================================================================
// Types
// ============================================================================

/// Identifies one fetch. Tokens increase monotonically per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// What the view is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// No transaction id observed yet.
    #[default]
    Idle,
    /// A fetch for `txid` is in flight.
    Loading { txid: String },
    /// The transaction is on screen.
    Loaded(Box<TransactionDetails>),
    /// The fetch for `txid` failed and was handed to the error renderer.
    Failed { txid: String },
}

/// Result of applying a fetch completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Loaded,
    Failed,
    /// A newer request was issued; the completion was discarded.
    Stale,
}

// ============================================================================
// Details View
// ============================================================================

#[derive(Debug, Default)]
pub struct DetailsView {
    state: ViewState,
    latest: u64,
}

impl DetailsView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The transaction currently displayed, if loaded.
    #[must_use]
    pub fn transaction(&self) -> Option<&TransactionDetails> {
        match &self.state {
            ViewState::Loaded(details) => Some(details.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading { .. })
    }

    /// Enters `Loading` for `txid` and returns the token of the new request.
    ///
    /// Repeating the current id starts a new request too.
    pub fn begin(&mut self, txid: impl Into<String>) -> RequestToken {
        self.latest += 1;
        self.state = ViewState::Loading { txid: txid.into() };
        RequestToken(self.latest)
    }

    /// Applies the completion of the request identified by `token`.
    ///
    /// Failures are forwarded unchanged to `renderer`.
    pub fn apply<R: ErrorRenderer + ?Sized>(
        &mut self,
        token: RequestToken,
        result: Result<Transaction, ExplorerError>,
        renderer: &mut R,
    ) -> ApplyOutcome {
        if token.0 != self.latest {
            tracing::debug!(
                "Discarding stale response for request {} (latest is {})",
                token.0,
                self.latest
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(tx) => {
                self.state = ViewState::Loaded(Box::new(TransactionDetails::from(tx)));
                ApplyOutcome::Loaded
            }
            Err(error) => {
                let txid = match &self.state {
                    ViewState::Loading { txid } => txid.clone(),
                    _ => String::new(),
                };
                tracing::warn!("Failed to load transaction '{txid}': {error}");
                renderer.render_server_errors(None, &error);
                self.state = ViewState::Failed { txid };
                ApplyOutcome::Failed
            }
        }
    }

    /// Tears the view down, dropping any displayed transaction.
    ///
    /// Requests still in flight become stale.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.state = ViewState::Idle;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{RecordingRenderer, TransactionMother};

    #[test]
    fn test_starts_idle() {
        let view = DetailsView::new();
        assert_eq!(view.state(), &ViewState::Idle);
        assert!(view.transaction().is_none());
    }

    #[test]
    fn test_begin_then_load() {
        let mut view = DetailsView::new();
        let mut renderer = RecordingRenderer::default();

        let token = view.begin("tx1");
        assert!(view.is_loading());

        let tx = TransactionMother::with_values("tx1", &[10.0], &[7.0]);
        let outcome = view.apply(token, Ok(tx), &mut renderer);

        assert_eq!(outcome, ApplyOutcome::Loaded);
        let details = view.transaction().unwrap();
        assert_eq!(details.id, "tx1");
        assert_eq!(details.fee(), 3.0);
        assert!(renderer.calls.is_empty());
    }

    #[test]
    fn test_failure_is_forwarded_to_renderer() {
        let mut view = DetailsView::new();
        let mut renderer = RecordingRenderer::default();

        let token = view.begin("missing");
        let outcome = view.apply(token, Err(ExplorerError::not_found("missing")), &mut renderer);

        assert_eq!(outcome, ApplyOutcome::Failed);
        assert_eq!(
            view.state(),
            &ViewState::Failed {
                txid: "missing".to_string()
            }
        );
        assert_eq!(
            renderer.calls,
            vec![(None, "transaction 'missing' not found".to_string())]
        );
    }

    #[test]
    fn test_failed_does_not_block_next_load() {
        let mut view = DetailsView::new();
        let mut renderer = RecordingRenderer::default();

        let token = view.begin("bad");
        view.apply(token, Err(ExplorerError::not_found("bad")), &mut renderer);

        let token = view.begin("good");
        let outcome = view.apply(
            token,
            Ok(TransactionMother::with_values("good", &[1.0], &[1.0])),
            &mut renderer,
        );
        assert_eq!(outcome, ApplyOutcome::Loaded);
        assert_eq!(view.transaction().map(|d| d.id.as_str()), Some("good"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut view = DetailsView::new();
        let mut renderer = RecordingRenderer::default();

        let first = view.begin("old");
        let second = view.begin("new");

        let outcome = view.apply(
            second,
            Ok(TransactionMother::with_values("new", &[], &[1.0])),
            &mut renderer,
        );
        assert_eq!(outcome, ApplyOutcome::Loaded);

        let outcome = view.apply(
            first,
            Ok(TransactionMother::with_values("old", &[], &[1.0])),
            &mut renderer,
        );
        assert_eq!(outcome, ApplyOutcome::Stale);
        assert_eq!(view.transaction().map(|d| d.id.as_str()), Some("new"));
    }

    #[test]
    fn test_stale_failure_is_not_rendered() {
        let mut view = DetailsView::new();
        let mut renderer = RecordingRenderer::default();

        let first = view.begin("a");
        let _second = view.begin("b");
        let outcome = view.apply(first, Err(ExplorerError::not_found("a")), &mut renderer);

        assert_eq!(outcome, ApplyOutcome::Stale);
        assert!(renderer.calls.is_empty());
        assert!(view.is_loading());
    }

    #[test]
    fn test_repeated_id_starts_new_request() {
        let mut view = DetailsView::new();
        let mut renderer = RecordingRenderer::default();

        let token = view.begin("tx");
        view.apply(
            token,
            Ok(TransactionMother::with_values("tx", &[], &[])),
            &mut renderer,
        );

        let again = view.begin("tx");
        assert_ne!(token, again);
        assert!(view.is_loading());
    }

    #[test]
    fn test_reset_makes_in_flight_requests_stale() {
        let mut view = DetailsView::new();
        let mut renderer = RecordingRenderer::default();

        let token = view.begin("tx");
        view.reset();
        let outcome = view.apply(
            token,
            Ok(TransactionMother::with_values("tx", &[], &[])),
            &mut renderer,
        );

        assert_eq!(outcome, ApplyOutcome::Stale);
        assert_eq!(view.state(), &ViewState::Idle);
    }
}
