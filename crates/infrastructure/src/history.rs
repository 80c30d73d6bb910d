//! Address bar adapter.

use waypoint_application::ports::HistorySink;

/// In-process stand-in for the host's address bar and session history.
///
/// Fragment replacement rewrites the current entry in place; the entry
/// count never changes and no reload is triggered.
#[derive(Debug, Clone)]
pub struct AddressBar {
    entries: Vec<String>,
}

impl AddressBar {
    /// Creates an address bar with a single initial entry.
    #[must_use]
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_url.into()],
        }
    }

    /// The URL currently shown.
    #[must_use]
    pub fn current_url(&self) -> &str {
        self.entries.last().map_or("", String::as_str)
    }

    /// Number of session history entries.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl HistorySink for AddressBar {
    fn replace_fragment(&mut self, fragment: &str) {
        if let Some(current) = self.entries.last_mut() {
            let base = current.split('#').next().unwrap_or("").to_string();
            *current = format!("{base}#{fragment}");
            tracing::debug!(url = %current, "replaced address fragment");
        }
    }
}
