//! The scanned page model.
//!
//! Everything here is discovered once at startup by scanning the rendered
//! page and is never structurally mutated afterward. The only thing that
//! changes for the lifetime of the page view is the active-link flag, and
//! that lives in [`crate::state::NavigatorState`], not here.

use serde::{Deserialize, Serialize};

use crate::id::SectionId;

/// The element that shows the "last login" timestamp.
///
/// Optional and singleton: a page without one is a valid, inert
/// configuration, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayTarget {
    /// Element identifier of the display target on the page.
    pub element_id: String,
}

/// A navigation link with its target fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// The raw href as it appears on the page, e.g. `#about`.
    pub href: String,
    /// Lookup key derived from the href (the part after the leading `#`).
    pub fragment: String,
}

impl NavLink {
    /// Builds a link from its page href.
    #[must_use]
    pub fn from_href(href: impl Into<String>) -> Self {
        let href = href.into();
        let fragment = crate::id::fragment_of(&href).to_string();
        Self { href, fragment }
    }
}

/// A content section with a stable identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Identifier matched against link fragments.
    pub id: SectionId,
}

/// Result of the one-time startup page scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageModel {
    /// The "last login" display element, if the page has one.
    pub last_login: Option<DisplayTarget>,
    /// Navigation links in document order.
    pub links: Vec<NavLink>,
    /// Content sections in document order.
    pub sections: Vec<Section>,
}

impl PageModel {
    /// Looks up a section by identifier.
    #[must_use]
    pub fn section(&self, fragment: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id.as_str() == fragment)
    }

    /// Looks up the link targeting the given section identifier.
    #[must_use]
    pub fn link_for(&self, section_id: &SectionId) -> Option<&NavLink> {
        self.links
            .iter()
            .find(|l| l.fragment == section_id.as_str())
    }
}
