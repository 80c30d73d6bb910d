//! Waypoint Domain - Core navigation types
//!
//! This crate defines the domain model for the Waypoint page navigator.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod id;
pub mod intersection;
pub mod locale;
pub mod page;
pub mod state;

pub use error::{DomainError, DomainResult};
pub use id::{fragment_of, SectionId};
pub use intersection::IntersectionEntry;
pub use locale::format_last_login;
pub use page::{DisplayTarget, NavLink, PageModel, Section};
pub use state::NavigatorState;
