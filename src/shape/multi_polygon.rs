use super::Approximation;
use crate::geometry::RingStore;
use crate::math::Point2;
use crate::path::WindingRule;

/// Approximation of a shape made of several rings.
///
/// Rings are filled with the even-odd rule, so a ring nested inside another
/// one is drawn as a hole.
#[derive(Debug, Clone)]
pub struct MultiPolygonApprox {
    store: RingStore,
}

impl MultiPolygonApprox {
    /// Copies `rings` into a new approximation. Empty rings are dropped.
    #[must_use]
    pub fn new<R: AsRef<[Point2]>>(rings: &[R]) -> Self {
        Self {
            store: RingStore::from_rings(rings),
        }
    }

    /// Number of non-empty rings.
    #[must_use]
    pub fn ring_count(&self) -> usize {
        self.store.ring_count()
    }
}

impl Approximation for MultiPolygonApprox {
    fn store(&self) -> &RingStore {
        &self.store
    }

    fn winding_rule(&self) -> WindingRule {
        WindingRule::EvenOdd
    }

    fn as_multi_polygon(&self) -> Option<&MultiPolygonApprox> {
        Some(self)
    }
}
