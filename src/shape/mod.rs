//! Render-side approximations of polygonal shapes.
//!
//! Each kind owns an immutable [`RingStore`] and hands out fresh
//! [`SimplifyingCursor`]s on demand. Callers that need to tell the kinds
//! apart match on [`ApproxShape`] or ask
//! [`Approximation::as_multi_polygon`].

mod multi_polygon;
mod polygon;

pub use multi_polygon::MultiPolygonApprox;
pub use polygon::PolygonApprox;

use crate::geometry::{Aabb2, RingStore};
use crate::math::transform_2d::PointTransform;
use crate::math::Point2;
use crate::path::{SimplifyingCursor, Tolerance, WindingRule};

/// Common interface of every polygon approximation kind.
pub trait Approximation {
    /// The vertex storage backing this shape.
    fn store(&self) -> &RingStore;

    /// Fill rule the painter should use for this shape's path.
    fn winding_rule(&self) -> WindingRule;

    /// Starts a new simplified pass over the shape.
    ///
    /// `transform`, if given, maps every emitted point; skip decisions are
    /// made in shape coordinates.
    fn path_iter<'a>(
        &'a self,
        transform: Option<&'a dyn PointTransform>,
        tolerance: Tolerance,
    ) -> SimplifyingCursor<'a> {
        SimplifyingCursor::new(self.store(), transform, tolerance, self.winding_rule())
    }

    /// Distance from `p` to the nearest edge, or `None` for edgeless shapes.
    fn distance_to(&self, p: &Point2) -> Option<f64> {
        self.store().distance_to(p)
    }

    /// Bounding box of the shape, `None` when it has no vertices.
    fn bounds(&self) -> Option<Aabb2> {
        self.store().bounds()
    }

    /// Returns `true` if the shape's bounds overlap `viewport`.
    ///
    /// Empty shapes never intersect anything.
    fn intersects(&self, viewport: &Aabb2) -> bool {
        self.bounds().is_some_and(|b| b.intersects(viewport))
    }

    /// Returns the multi-polygon view of this shape, if it is one.
    fn as_multi_polygon(&self) -> Option<&MultiPolygonApprox> {
        None
    }
}

/// The closed set of approximation kinds.
#[derive(Debug, Clone)]
pub enum ApproxShape {
    Polygon(PolygonApprox),
    MultiPolygon(MultiPolygonApprox),
}

impl ApproxShape {
    /// Builds a [`PolygonApprox`] for exactly one ring and a
    /// [`MultiPolygonApprox`] otherwise.
    #[must_use]
    pub fn from_rings<R: AsRef<[Point2]>>(rings: &[R]) -> Self {
        match rings {
            [ring] => Self::Polygon(PolygonApprox::new(ring.as_ref())),
            _ => Self::MultiPolygon(MultiPolygonApprox::new(rings)),
        }
    }
}

impl Approximation for ApproxShape {
    fn store(&self) -> &RingStore {
        match self {
            Self::Polygon(p) => p.store(),
            Self::MultiPolygon(m) => m.store(),
        }
    }

    fn winding_rule(&self) -> WindingRule {
        match self {
            Self::Polygon(p) => p.winding_rule(),
            Self::MultiPolygon(m) => m.winding_rule(),
        }
    }

    fn as_multi_polygon(&self) -> Option<&MultiPolygonApprox> {
        match self {
            Self::Polygon(_) => None,
            Self::MultiPolygon(m) => Some(m),
        }
    }
}

impl From<PolygonApprox> for ApproxShape {
    fn from(polygon: PolygonApprox) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<MultiPolygonApprox> for ApproxShape {
    fn from(multi: MultiPolygonApprox) -> Self {
        Self::MultiPolygon(multi)
    }
}
