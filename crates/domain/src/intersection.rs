//! Viewport-intersection records.

use serde::{Deserialize, Serialize};

use crate::id::SectionId;

/// One entry of an intersection notification batch.
///
/// Supplied by the observation mechanism whenever a section's intersecting
/// state against the detection band changes; ephemeral, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    /// The observed section.
    pub section_id: SectionId,
    /// Whether the section now intersects the detection band.
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Builds an entry for a section that entered the detection band.
    #[must_use]
    pub fn entered(section_id: SectionId) -> Self {
        Self {
            section_id,
            is_intersecting: true,
        }
    }

    /// Builds an entry for a section that left the detection band.
    #[must_use]
    pub fn left(section_id: SectionId) -> Self {
        Self {
            section_id,
            is_intersecting: false,
        }
    }
}
