//! Waypoint Application - Use cases and ports
//!
//! This crate contains the navigation logic and the port traits it needs
//! from the host environment. Nothing here knows how the page is rendered,
//! how scrolling is animated, or where the address bar lives.

pub mod navigator;
pub mod ports;

pub use navigator::{FollowOutcome, Navigator};
