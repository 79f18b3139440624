use tracing::debug;

use super::Aabb2;
use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{Point2, Point2f};

/// Per-vertex marker separating rings inside the flattened vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingMarker {
    /// First vertex of a ring.
    RingStart,
    /// Any later vertex of the same ring.
    RingContinue,
}

/// Immutable, flattened storage for the vertices of one or more rings.
///
/// All ring vertices are concatenated into a single array in ring order, with
/// a parallel marker array flagging where each ring begins. Coordinates are
/// narrowed to single precision, which is all a screen path needs.
///
/// A store built from no vertices at all is the empty store: it has no
/// bounds and every cursor over it starts out done.
#[derive(Debug, Clone, Default)]
pub struct RingStore {
    vertices: Vec<Point2f>,
    markers: Vec<RingMarker>,
    ring_count: usize,
    bounds: Option<Aabb2>,
}

impl RingStore {
    /// Flattens `rings` into a new store. Empty rings contribute nothing.
    #[must_use]
    pub fn from_rings<R: AsRef<[Point2]>>(rings: &[R]) -> Self {
        let npoints: usize = rings.iter().map(|r| r.as_ref().len()).sum();
        if npoints == 0 {
            debug!(rings = rings.len(), "no vertices, building empty ring store");
            return Self::default();
        }

        let mut vertices = Vec::with_capacity(npoints);
        let mut markers = Vec::with_capacity(npoints);
        let mut ring_count = 0;
        for ring in rings.iter().map(AsRef::as_ref).filter(|r| !r.is_empty()) {
            ring_count += 1;
            markers.push(RingMarker::RingStart);
            markers.extend(std::iter::repeat_n(RingMarker::RingContinue, ring.len() - 1));
            vertices.extend(ring.iter().map(|p| p.cast::<f32>()));
        }

        let bounds = Aabb2::from_points(vertices.iter().map(|v| v.cast::<f64>()));
        let store = Self {
            vertices,
            markers,
            ring_count,
            bounds,
        };
        debug_assert!(store.validate().is_ok(), "ring store layout is inconsistent");
        debug!(vertices = npoints, rings = ring_count, "built ring store");
        store
    }

    /// Checks the marker layout against the vertex list.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if the marker array length differs from the
    /// vertex count, the first vertex is not a ring start, or the number of
    /// ring starts differs from the ring count.
    pub fn validate(&self) -> Result<()> {
        if self.markers.len() != self.vertices.len() {
            return Err(GeometryError::MarkerCountMismatch {
                vertices: self.vertices.len(),
                markers: self.markers.len(),
            }
            .into());
        }
        if self
            .markers
            .first()
            .is_some_and(|m| *m != RingMarker::RingStart)
        {
            return Err(GeometryError::MissingRingStart.into());
        }
        let found = self
            .markers
            .iter()
            .filter(|m| **m == RingMarker::RingStart)
            .count();
        if found != self.ring_count {
            return Err(GeometryError::RingCountMismatch {
                expected: self.ring_count,
                found,
            }
            .into());
        }
        Ok(())
    }

    /// Number of stored vertices across all rings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` for the empty store.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of non-empty rings.
    #[must_use]
    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    /// All vertices, ring after ring.
    #[must_use]
    pub fn vertices(&self) -> &[Point2f] {
        &self.vertices
    }

    /// One marker per vertex, parallel to [`vertices`](Self::vertices).
    #[must_use]
    pub fn markers(&self) -> &[RingMarker] {
        &self.markers
    }

    /// Bounding box of every vertex; `None` for the empty store.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb2> {
        self.bounds
    }

    /// Iterates over the rings as vertex slices, in insertion order.
    pub fn rings(&self) -> impl Iterator<Item = &[Point2f]> + '_ {
        let mut start = 0;
        std::iter::from_fn(move || {
            if start >= self.vertices.len() {
                return None;
            }
            let end = self.markers[start + 1..]
                .iter()
                .position(|m| *m == RingMarker::RingStart)
                .map_or(self.vertices.len(), |offset| start + 1 + offset);
            let ring = &self.vertices[start..end];
            start = end;
            Some(ring)
        })
    }

    /// Returns the distance from `p` to the nearest ring edge.
    ///
    /// Edges join consecutive vertices of the same ring; the pair spanning
    /// two rings is never an edge. Returns `None` when no ring has at least
    /// two vertices.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> Option<f64> {
        self.vertices
            .windows(2)
            .zip(self.markers.iter().skip(1))
            .filter(|(_, marker)| **marker == RingMarker::RingContinue)
            .map(|(pair, _)| point_to_segment_dist(p, &pair[0].cast(), &pair[1].cast()))
            .reduce(f64::min)
    }
}
