//! Route emissions for the details view.
//!
//! A [`Route`] carries the `txid` parameter. Every emission, including one
//! that repeats the current id, makes the view fetch again.

/// Maximum number of visited ids remembered for "back".
pub const MAX_HISTORY: usize = 50;

/// A route parameter emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub txid: String,
}

impl Route {
    #[must_use]
    pub fn new(txid: impl Into<String>) -> Self {
        Self { txid: txid.into() }
    }
}

/// Visited transaction ids, most recent last.
#[derive(Debug, Clone, Default)]
pub struct RouteHistory {
    entries: Vec<String>,
}

impl RouteHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Navigates to `txid`. Navigating to the current id does not add a
    /// history entry but still emits a route.
    pub fn navigate(&mut self, txid: &str) -> Route {
        let txid = txid.trim();
        if self.current() != Some(txid) {
            self.entries.push(txid.to_string());
            if self.entries.len() > MAX_HISTORY {
                self.entries.remove(0);
            }
        }
        Route::new(txid)
    }

    /// Goes back one entry, returning the route to show.
    pub fn back(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        self.entries.pop();
        self.current().map(Route::new)
    }

    /// Re-emits the current route.
    #[must_use]
    pub fn reload(&self) -> Option<Route> {
        self.current().map(Route::new)
    }
}
