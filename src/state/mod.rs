//! State management for the txlens TUI.
//!
//! - [`DetailsView`] - the transaction view lifecycle (Idle/Loading/Loaded/Failed)
//! - [`NavigationState`] - focus, scroll offsets and route history
//! - [`UiState`] - popups; also the app's [`ErrorRenderer`]
//! - [`AppConfig`] - persistent configuration
//!
//! ```text
//! key ──▶ AppCommand ──▶ App::execute_command ──▶ Route ──▶ DetailsView::begin
//!                                                              │ spawn fetch
//! AppMessage::TransactionFetched ◀────────────────────────────┘
//!        └──▶ DetailsView::apply ──▶ Loaded | Failed (UiState renders) | Stale
//! ```

use tokio::sync::mpsc;

use crate::client::{ExplorerClient, TransactionSource};
use crate::domain::{ExplorerError, Transaction};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_commands;
mod app_lifecycle;
mod app_messages;

pub mod config;
pub mod details;
pub mod errors;
pub mod navigation;
pub mod route;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use details::{ApplyOutcome, DetailsView, RequestToken, ViewState};
pub use errors::ErrorRenderer;
pub use navigation::{NavigationState, Pane};
pub use route::{Route, RouteHistory};
pub use ui_state::{PopupState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background fetch tasks to the main loop.
#[derive(Debug)]
pub enum AppMessage {
    /// A transaction fetch finished.
    TransactionFetched {
        token: RequestToken,
        result: Result<Transaction, ExplorerError>,
    },
}

// ============================================================================
// Main App State
// ============================================================================

/// The application state container.
#[derive(Debug)]
pub struct App<S: TransactionSource = ExplorerClient> {
    /// Focus, scroll offsets and visited ids.
    pub nav: NavigationState,

    /// The transaction details view.
    pub details: DetailsView,

    /// Popups.
    pub ui: UiState,

    /// Explorer base URL, shown in the header.
    pub api_url: String,

    /// Whether the application should exit.
    pub exit: bool,

    source: S,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl<S: TransactionSource> App<S> {
    /// Creates an app that fetches transactions from `source`.
    #[must_use]
    pub fn new(source: S, api_url: impl Into<String>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            nav: NavigationState::new(),
            details: DetailsView::new(),
            ui: UiState::new(),
            api_url: api_url.into(),
            exit: false,
            source,
            message_tx,
            message_rx,
        }
    }
}
