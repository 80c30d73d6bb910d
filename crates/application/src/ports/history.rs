//! History port for address-fragment updates.

/// Port for the host's address bar and session history.
pub trait HistorySink {
    /// Replaces the current entry's URL fragment in place.
    ///
    /// Must not push a new history entry and must not trigger a reload.
    fn replace_fragment(&mut self, fragment: &str);
}
