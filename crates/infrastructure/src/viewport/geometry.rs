//! Viewport and element geometry in document coordinates.

use serde::{Deserialize, Serialize};
use waypoint_domain::SectionId;

/// An element's layout rectangle along the vertical axis.
///
/// Horizontal extent is irrelevant to the navigator; sections span the
/// page width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the document top to the element's top edge.
    pub top: f64,
    /// Element height.
    pub height: f64,
}

impl Rect {
    /// Distance from the document top to the element's bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A section's identifier paired with its layout rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGeometry {
    /// The section this rectangle belongs to.
    pub id: SectionId,
    /// The section's layout rectangle.
    pub rect: Rect,
}

/// The scrollable viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Visible height of the viewport.
    pub height: f64,
    /// Current scroll offset from the document top.
    pub scroll_y: f64,
}

impl Viewport {
    /// The central detection band in document coordinates.
    ///
    /// The band is the viewport minus the configured top and bottom
    /// margins; with the default configuration that is the middle 20%
    /// vertical slice.
    #[must_use]
    pub fn detection_band(&self, config: &BandConfig) -> Rect {
        let top = self.scroll_y + self.height * config.top_margin;
        let bottom = self.scroll_y + self.height * (1.0 - config.bottom_margin);
        Rect {
            top,
            height: (bottom - top).max(0.0),
        }
    }
}

/// Detection band configuration.
///
/// Mirrors the tuning of the tracker: a narrow central band so that two
/// sections rarely qualify at once, and a 40% minimum overlap before a
/// section counts as intersecting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandConfig {
    /// Fraction of the viewport excluded at the top.
    pub top_margin: f64,
    /// Fraction of the viewport excluded at the bottom.
    pub bottom_margin: f64,
    /// Minimum fraction of a section's height that must lie inside the
    /// band before the section counts as intersecting.
    pub threshold: f64,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            top_margin: 0.40,
            bottom_margin: 0.40,
            threshold: 0.40,
        }
    }
}

/// Fraction of `rect`'s height that lies inside `band`.
///
/// Zero-height rectangles never overlap anything.
#[must_use]
pub(crate) fn overlap_ratio(rect: &Rect, band: &Rect) -> f64 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    let overlap = (rect.bottom().min(band.bottom()) - rect.top.max(band.top)).max(0.0);
    overlap / rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_band_is_the_middle_fifth() {
        let viewport = Viewport {
            height: 1000.0,
            scroll_y: 0.0,
        };
        let band = viewport.detection_band(&BandConfig::default());
        assert_eq!(band.top, 400.0);
        assert_eq!(band.bottom(), 600.0);
    }

    #[test]
    fn test_band_follows_the_scroll_offset() {
        let viewport = Viewport {
            height: 1000.0,
            scroll_y: 250.0,
        };
        let band = viewport.detection_band(&BandConfig::default());
        assert_eq!(band.top, 650.0);
        assert_eq!(band.bottom(), 850.0);
    }

    #[test]
    fn test_overlap_ratio_of_disjoint_rects_is_zero() {
        let band = Rect {
            top: 400.0,
            height: 200.0,
        };
        let rect = Rect {
            top: 0.0,
            height: 400.0,
        };
        assert_eq!(overlap_ratio(&rect, &band), 0.0);
    }

    #[test]
    fn test_overlap_ratio_of_half_covered_section() {
        let band = Rect {
            top: 400.0,
            height: 200.0,
        };
        let rect = Rect {
            top: 400.0,
            height: 400.0,
        };
        assert_eq!(overlap_ratio(&rect, &band), 0.5);
    }

    #[test]
    fn test_zero_height_rect_never_overlaps() {
        let band = Rect {
            top: 0.0,
            height: 1000.0,
        };
        let rect = Rect {
            top: 100.0,
            height: 0.0,
        };
        assert_eq!(overlap_ratio(&rect, &band), 0.0);
    }
}
