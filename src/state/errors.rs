//! Error rendering capability.
//!
//! The details view hands failures to an [`ErrorRenderer`] without looking
//! at them. The app's renderer turns them into a message popup.

use crate::domain::ExplorerError;

/// Shows a failure to the user.
pub trait ErrorRenderer {
    /// Render `failure`. `context` names the form or field the error belongs
    /// to; the details view has none and passes `None`.
    fn render_server_errors(&mut self, context: Option<&str>, failure: &ExplorerError);
}

/// Formats a failure as the text of a message popup.
#[must_use]
pub fn format_failure(context: Option<&str>, failure: &ExplorerError) -> String {
    let lines = failure.user_messages().join("\n");
    match context {
        Some(context) => format!("{context}\n{lines}"),
        None => lines,
    }
}
