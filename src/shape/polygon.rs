use super::Approximation;
use crate::geometry::RingStore;
use crate::math::Point2;
use crate::path::WindingRule;

/// Approximation of a single closed ring.
#[derive(Debug, Clone)]
pub struct PolygonApprox {
    store: RingStore,
}

impl PolygonApprox {
    /// Copies `ring` into a new approximation.
    #[must_use]
    pub fn new(ring: &[Point2]) -> Self {
        Self {
            store: RingStore::from_rings(&[ring]),
        }
    }
}

impl Approximation for PolygonApprox {
    fn store(&self) -> &RingStore {
        &self.store
    }

    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }
}
