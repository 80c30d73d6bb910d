//! The navigator: event handlers over the page model and state record.
//!
//! All three behaviors of the component live here: the startup timestamp
//! stamp, the scroll-position tracker, and the click-to-scroll handler.
//! Each handler runs to completion on a single logical thread of control;
//! re-entry happens only through [`Navigator::on_intersections`] (batched,
//! host-scheduled) and [`Navigator::on_click`] (one per interaction).

use waypoint_domain::{
    format_last_login, fragment_of, IntersectionEntry, NavigatorState, PageModel, SectionId,
};

use crate::ports::{Clock, HistorySink, NavPresenter, Scroller};

/// Result of handling a link click.
///
/// Not an error type: a click on a link with no matching section is a valid
/// interaction that the handler drops silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowOutcome {
    /// The viewport was sent toward the section and the fragment replaced.
    Followed {
        /// Identifier of the section the click resolved to.
        section_id: SectionId,
    },
    /// The href resolved to no section; nothing was changed.
    NoTarget,
}

/// Coordinates the page model, the state record, and the host ports.
///
/// Constructed once per page view, after the one-time page scan. There is
/// no teardown: the navigator lives as long as the page does.
pub struct Navigator<C, P, S, H> {
    page: PageModel,
    state: NavigatorState,
    clock: C,
    presenter: P,
    scroller: S,
    history: H,
}

impl<C, P, S, H> Navigator<C, P, S, H>
where
    C: Clock,
    P: NavPresenter,
    S: Scroller,
    H: HistorySink,
{
    /// Creates a navigator over a scanned page.
    pub fn new(page: PageModel, clock: C, presenter: P, scroller: S, history: H) -> Self {
        Self {
            page,
            state: NavigatorState::default(),
            clock,
            presenter,
            scroller,
            history,
        }
    }

    /// Startup pass: stamps the "last login" timestamp.
    ///
    /// Runs once when the page is ready. A page without a display target is
    /// an inert configuration and the stamp is skipped silently. The stamp
    /// is a load-time snapshot, never refreshed on a timer.
    pub fn start(&mut self) {
        if self.page.last_login.is_none() {
            tracing::debug!("no last-login display target, skipping stamp");
            return;
        }
        let text = format_last_login(&self.clock.now());
        self.presenter.set_last_login_text(&text);
        tracing::info!(%text, "stamped last login");
    }

    /// Handles one batch of intersection notifications.
    ///
    /// Every entry that reports a section entering the detection band
    /// triggers the activation procedure; entries that report a section
    /// leaving never deactivate anything on their own. Entries are applied
    /// in delivery order, so when a batch carries several entering
    /// sections the last one processed wins.
    pub fn on_intersections(&mut self, entries: &[IntersectionEntry]) {
        for entry in entries {
            if entry.is_intersecting {
                self.activate(entry.section_id.clone());
            }
        }
    }

    /// Handles a click on the navigation link with the given href.
    ///
    /// The host has already suppressed its default navigation jump. The
    /// fragment after the leading `#` is looked up among the page's
    /// sections; with no match the handler aborts before touching the
    /// viewport, the state record, or the history.
    pub fn on_click(&mut self, href: &str) -> FollowOutcome {
        let fragment = fragment_of(href);
        let Some(section) = self.page.section(fragment) else {
            tracing::debug!(href, "click on link with no matching section");
            return FollowOutcome::NoTarget;
        };
        let section_id = section.id.clone();

        self.scroller.scroll_to(&section_id);
        self.activate(section_id.clone());
        self.history.replace_fragment(section_id.as_str());

        FollowOutcome::Followed { section_id }
    }

    /// The activation procedure shared by the tracker and the click path.
    ///
    /// Updates the state record, then reprojects: exactly the link whose
    /// fragment equals the identifier ends up marked active. A link set
    /// with no match for the identifier ends up fully inactive.
    fn activate(&mut self, section_id: SectionId) {
        if self.state.activate(section_id.clone()) {
            tracing::debug!(section = %section_id, "active section changed");
        }
        for link in &self.page.links {
            self.presenter
                .set_link_active(&link.href, link.fragment == section_id.as_str());
        }
    }

    /// The current state record.
    #[must_use]
    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    /// The scanned page model.
    #[must_use]
    pub fn page(&self) -> &PageModel {
        &self.page
    }

    /// Read access to the presenter, for rendering the projection.
    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the scroller.
    ///
    /// The host owns the scroll animation; this is how it picks up the
    /// fire-and-forget requests the click handler leaves behind.
    pub fn scroller_mut(&mut self) -> &mut S {
        &mut self.scroller
    }

    /// Read access to the history sink.
    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }
}
