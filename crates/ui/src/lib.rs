//! Waypoint UI - Presentation projection
//!
//! The navigator's state record is projected onto this view model the same
//! way a browser projects it onto class attributes. The view never feeds
//! back into the navigation logic.

pub mod view;

pub use view::{LinkView, NavView};
