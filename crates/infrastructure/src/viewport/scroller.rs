//! Viewport scroller adapter.

use waypoint_application::ports::Scroller;
use waypoint_domain::SectionId;

use super::geometry::SectionGeometry;

/// Translates scroll requests into a destination scroll offset.
///
/// The navigator fires and forgets; the host event loop drains the pending
/// destination and animates the viewport toward it at its own pace.
#[derive(Debug, Default)]
pub struct ViewportScroller {
    geometry: Vec<SectionGeometry>,
    pending: Option<f64>,
}

impl ViewportScroller {
    /// Creates a scroller over the scanned section geometry.
    #[must_use]
    pub fn new(geometry: Vec<SectionGeometry>) -> Self {
        Self {
            geometry,
            pending: None,
        }
    }

    /// Takes the destination of the most recent scroll request, if any.
    pub fn take_destination(&mut self) -> Option<f64> {
        self.pending.take()
    }
}

impl Scroller for ViewportScroller {
    fn scroll_to(&mut self, section_id: &SectionId) {
        if let Some(section) = self.geometry.iter().find(|g| &g.id == section_id) {
            self.pending = Some(section.rect.top);
            tracing::debug!(section = %section_id, top = section.rect.top, "scroll requested");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::geometry::Rect;
    use super::*;

    fn id(s: &str) -> SectionId {
        SectionId::parse(s).unwrap()
    }

    #[test]
    fn test_scroll_aligns_section_top_with_viewport_top() {
        let mut scroller = ViewportScroller::new(vec![SectionGeometry {
            id: id("about"),
            rect: Rect {
                top: 640.0,
                height: 400.0,
            },
        }]);

        scroller.scroll_to(&id("about"));
        assert_eq!(scroller.take_destination(), Some(640.0));
        assert_eq!(scroller.take_destination(), None);
    }

    #[test]
    fn test_unknown_section_leaves_no_destination() {
        let mut scroller = ViewportScroller::new(vec![]);
        scroller.scroll_to(&id("missing"));
        assert_eq!(scroller.take_destination(), None);
    }

    #[test]
    fn test_latest_request_wins() {
        let mut scroller = ViewportScroller::new(vec![
            SectionGeometry {
                id: id("home"),
                rect: Rect {
                    top: 0.0,
                    height: 400.0,
                },
            },
            SectionGeometry {
                id: id("about"),
                rect: Rect {
                    top: 400.0,
                    height: 400.0,
                },
            },
        ]);

        scroller.scroll_to(&id("home"));
        scroller.scroll_to(&id("about"));
        assert_eq!(scroller.take_destination(), Some(400.0));
    }
}
