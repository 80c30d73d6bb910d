//! The navigation view model.

use std::fmt::Write as _;

use waypoint_application::ports::NavPresenter;
use waypoint_domain::PageModel;

/// Presentation state of one navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkView {
    /// The link's href, the key the presenter port uses.
    pub href: String,
    /// Whether the link currently carries the active marker.
    pub active: bool,
}

/// In-memory projection of the page's navigation chrome.
///
/// Stands in for the class-list and text-content mutations a browser host
/// would perform: one active flag per link plus the last-login text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavView {
    /// Links in document order.
    pub links: Vec<LinkView>,
    /// Text shown in the last-login display element, once stamped.
    pub last_login_text: Option<String>,
}

impl NavView {
    /// Builds the view for a scanned page, all links inactive.
    #[must_use]
    pub fn from_page(page: &PageModel) -> Self {
        Self {
            links: page
                .links
                .iter()
                .map(|link| LinkView {
                    href: link.href.clone(),
                    active: false,
                })
                .collect(),
            last_login_text: None,
        }
    }

    /// The href of the active link, if any.
    #[must_use]
    pub fn active_href(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.active)
            .map(|link| link.href.as_str())
    }

    /// Renders the view as terminal text, one line per link.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(text) = &self.last_login_text {
            let _ = writeln!(out, "last login: {text}");
        }
        for link in &self.links {
            let marker = if link.active { '*' } else { ' ' };
            let _ = writeln!(out, " [{marker}] {}", link.href);
        }
        out
    }
}

impl NavPresenter for NavView {
    fn set_link_active(&mut self, href: &str, active: bool) {
        if let Some(link) = self.links.iter_mut().find(|l| l.href == href) {
            link.active = active;
        }
    }

    fn set_last_login_text(&mut self, text: &str) {
        self.last_login_text = Some(text.to_string());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use waypoint_domain::NavLink;

    use super::*;

    fn view() -> NavView {
        let page = PageModel {
            last_login: None,
            links: vec![NavLink::from_href("#home"), NavLink::from_href("#about")],
            sections: Vec::new(),
        };
        NavView::from_page(&page)
    }

    #[test]
    fn test_new_view_has_no_active_link() {
        assert_eq!(view().active_href(), None);
    }

    #[test]
    fn test_set_link_active_flips_the_flag() {
        let mut view = view();
        view.set_link_active("#about", true);
        view.set_link_active("#home", false);
        assert_eq!(view.active_href(), Some("#about"));
    }

    #[test]
    fn test_unknown_href_is_ignored() {
        let mut view = view();
        view.set_link_active("#missing", true);
        assert_eq!(view.active_href(), None);
    }

    #[test]
    fn test_render_marks_the_active_link() {
        let mut view = view();
        view.set_link_active("#home", true);
        view.set_last_login_text("5 thg 6, 2024, 14:30:00");

        let rendered = view.render();
        assert_eq!(
            rendered,
            "last login: 5 thg 6, 2024, 14:30:00\n [*] #home\n [ ] #about\n"
        );
    }
}
