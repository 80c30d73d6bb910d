//! Presenter port for projecting navigator state onto the page.

/// Port for the page's presentation layer.
///
/// The navigator owns the state record; the presenter owns its projection.
/// Calls are run-to-completion and never fail: a presenter with nothing to
/// show for a given href simply ignores the call.
pub trait NavPresenter {
    /// Toggles the active marker on the link with the given href.
    fn set_link_active(&mut self, href: &str, active: bool);

    /// Writes the formatted timestamp into the last-login display element.
    ///
    /// Only invoked when the page scan found a display target.
    fn set_last_login_text(&mut self, text: &str);
}
