pub mod error;
pub mod geometry;
pub mod math;
pub mod path;
pub mod shape;

pub use error::{PolyApproxError, Result};
pub use geometry::{Aabb2, RingMarker, RingStore};
pub use path::{PathCommand, RenderParams, SegmentKind, SimplifyingCursor, Tolerance, WindingRule};
pub use shape::{ApproxShape, Approximation, MultiPolygonApprox, PolygonApprox};
