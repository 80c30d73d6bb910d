//! Viewport intersection observer.

use std::collections::HashMap;

use waypoint_domain::{IntersectionEntry, SectionId};

use super::geometry::{overlap_ratio, BandConfig, SectionGeometry, Viewport};

/// Watches registered sections against the viewport's detection band and
/// reports state changes in batches.
///
/// The first [`update`](Self::update) after registration delivers an entry
/// for every observed section; later updates deliver entries only for
/// sections whose intersecting state changed. Entries come out in
/// registration order, which is document order. The observer has no
/// lifetime bound: it stays registered for the whole page view.
#[derive(Debug, Default)]
pub struct IntersectionObserver {
    config: BandConfig,
    sections: Vec<SectionGeometry>,
    reported: HashMap<SectionId, bool>,
}

impl IntersectionObserver {
    /// Creates an observer with the given band configuration.
    #[must_use]
    pub fn new(config: BandConfig) -> Self {
        Self {
            config,
            sections: Vec::new(),
            reported: HashMap::new(),
        }
    }

    /// Registers a section for observation.
    pub fn observe(&mut self, geometry: SectionGeometry) {
        tracing::debug!(section = %geometry.id, "observing section");
        self.sections.push(geometry);
    }

    /// Registers every section of a scanned page, in document order.
    pub fn observe_all(&mut self, geometry: impl IntoIterator<Item = SectionGeometry>) {
        for section in geometry {
            self.observe(section);
        }
    }

    /// Evaluates all observed sections against the viewport and returns the
    /// batch of changed entries.
    pub fn update(&mut self, viewport: &Viewport) -> Vec<IntersectionEntry> {
        let band = viewport.detection_band(&self.config);
        let mut batch = Vec::new();

        for section in &self.sections {
            let intersecting = overlap_ratio(&section.rect, &band) >= self.config.threshold;
            let previous = self.reported.insert(section.id.clone(), intersecting);
            if previous != Some(intersecting) {
                batch.push(if intersecting {
                    IntersectionEntry::entered(section.id.clone())
                } else {
                    IntersectionEntry::left(section.id.clone())
                });
            }
        }

        if !batch.is_empty() {
            tracing::debug!(entries = batch.len(), "intersection batch");
        }
        batch
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::geometry::Rect;
    use super::*;

    fn id(s: &str) -> SectionId {
        SectionId::parse(s).unwrap()
    }

    fn section(name: &str, top: f64, height: f64) -> SectionGeometry {
        SectionGeometry {
            id: id(name),
            rect: Rect { top, height },
        }
    }

    fn observer() -> IntersectionObserver {
        let mut observer = IntersectionObserver::new(BandConfig::default());
        observer.observe_all([
            section("home", 0.0, 400.0),
            section("about", 400.0, 400.0),
            section("contact", 800.0, 400.0),
        ]);
        observer
    }

    #[test]
    fn test_first_update_reports_every_section() {
        let mut observer = observer();
        let viewport = Viewport {
            height: 1000.0,
            scroll_y: 0.0,
        };

        // Band [400, 600]: only `about` has 40% of its height inside.
        let batch = observer.update(&viewport);
        assert_eq!(
            batch,
            vec![
                IntersectionEntry::left(id("home")),
                IntersectionEntry::entered(id("about")),
                IntersectionEntry::left(id("contact")),
            ]
        );
    }

    #[test]
    fn test_unchanged_viewport_yields_empty_batch() {
        let mut observer = observer();
        let viewport = Viewport {
            height: 1000.0,
            scroll_y: 0.0,
        };
        observer.update(&viewport);
        assert_eq!(observer.update(&viewport), vec![]);
    }

    #[test]
    fn test_scrolling_reports_only_transitions() {
        let mut observer = observer();
        observer.update(&Viewport {
            height: 1000.0,
            scroll_y: 0.0,
        });

        // Band [800, 1000]: `about` leaves, `contact` enters, `home` is
        // unchanged and stays silent.
        let batch = observer.update(&Viewport {
            height: 1000.0,
            scroll_y: 400.0,
        });
        assert_eq!(
            batch,
            vec![
                IntersectionEntry::left(id("about")),
                IntersectionEntry::entered(id("contact")),
            ]
        );
    }

    #[test]
    fn test_threshold_boundary_counts_as_intersecting() {
        let mut observer = IntersectionObserver::new(BandConfig::default());
        // Band [200, 300] for a 500px viewport; 40 of the section's 100px
        // sit inside the band, exactly the 40% threshold.
        observer.observe(section("edge", 260.0, 100.0));

        let batch = observer.update(&Viewport {
            height: 500.0,
            scroll_y: 0.0,
        });
        assert_eq!(batch, vec![IntersectionEntry::entered(id("edge"))]);
    }

    #[test]
    fn test_no_sections_means_no_batches() {
        let mut observer = IntersectionObserver::new(BandConfig::default());
        let batch = observer.update(&Viewport {
            height: 1000.0,
            scroll_y: 0.0,
        });
        assert!(batch.is_empty());
    }
}
