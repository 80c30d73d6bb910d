//! Waypoint Infrastructure - Host environment adapters
//!
//! Concrete implementations of the application ports: the system clock, the
//! address bar, the page-document scanner, and the viewport with its
//! intersection observer.

pub mod clock;
pub mod history;
pub mod page;
pub mod viewport;

pub use clock::{FixedClock, SystemClock};
pub use history::AddressBar;
pub use page::{scan_page, PageDocument, PageDocumentError, ScannedPage};
pub use viewport::{BandConfig, IntersectionObserver, Rect, SectionGeometry, Viewport, ViewportScroller};
