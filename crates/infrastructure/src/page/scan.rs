//! The one-time startup scan.

use waypoint_domain::{DisplayTarget, NavLink, PageModel, Section, SectionId};

use super::document::{PageDocument, LAST_LOGIN_ID, NAV_LINK_CLASS, SECTION_CLASS};
use crate::viewport::SectionGeometry;

/// Result of scanning a page document.
#[derive(Debug, Clone, Default)]
pub struct ScannedPage {
    /// The domain-level page model.
    pub model: PageModel,
    /// Layout rectangles of the scanned sections, in document order.
    pub geometry: Vec<SectionGeometry>,
}

/// Scans a page document into a page model and its section geometry.
///
/// Runs once at startup and is deliberately tolerant: anchors without an
/// href, sections without a usable identifier, and a missing display target
/// all degrade to an inert configuration rather than an error. Later
/// additions to the page are invisible to the navigator.
#[must_use]
pub fn scan_page(document: &PageDocument) -> ScannedPage {
    let mut scanned = ScannedPage::default();

    for element in &document.elements {
        if element.id.as_deref() == Some(LAST_LOGIN_ID) {
            scanned.model.last_login = Some(DisplayTarget {
                element_id: LAST_LOGIN_ID.to_string(),
            });
        }

        if element.has_class(NAV_LINK_CLASS) {
            match &element.href {
                Some(href) => scanned.model.links.push(NavLink::from_href(href)),
                None => tracing::debug!("nav link without href skipped"),
            }
        }

        if element.has_class(SECTION_CLASS) {
            let id = element
                .id
                .as_deref()
                .and_then(|raw| SectionId::parse(raw).ok());
            match id {
                Some(id) => {
                    scanned.geometry.push(SectionGeometry {
                        id: id.clone(),
                        rect: element.rect.unwrap_or_default(),
                    });
                    scanned.model.sections.push(Section { id });
                }
                None => tracing::debug!("section without identifier skipped"),
            }
        }
    }

    tracing::info!(
        links = scanned.model.links.len(),
        sections = scanned.model.sections.len(),
        has_last_login = scanned.model.last_login.is_some(),
        "page scanned"
    );
    scanned
}
