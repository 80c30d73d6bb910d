//! Scroller port for viewport movement.

use waypoint_domain::SectionId;

/// Port for smooth-scrolling the viewport.
///
/// Fire and forget: the host environment owns the animation's progress and
/// completion, and the navigator never waits on it.
pub trait Scroller {
    /// Smoothly aligns the section's top edge with the viewport's top edge.
    fn scroll_to(&mut self, section_id: &SectionId);
}
