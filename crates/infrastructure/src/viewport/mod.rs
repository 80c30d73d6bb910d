//! Viewport geometry, intersection observation, and scrolling.

mod geometry;
mod observer;
mod scroller;

pub use geometry::{BandConfig, Rect, SectionGeometry, Viewport};
pub use observer::IntersectionObserver;
pub use scroller::ViewportScroller;
