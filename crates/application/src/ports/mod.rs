//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the navigation logic and the host
//! environment. Each port is a trait implemented by an adapter in the
//! infrastructure or ui layer.

mod clock;
mod history;
mod presenter;
mod scroller;

pub use clock::Clock;
pub use history::HistorySink;
pub use presenter::NavPresenter;
pub use scroller::Scroller;
