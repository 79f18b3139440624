pub mod distance_2d;
pub mod transform_2d;

/// 2D point type used at the API boundary.
pub type Point2 = nalgebra::Point2<f64>;

/// Single-precision 2D point used for stored and emitted vertices.
pub type Point2f = nalgebra::Point2<f32>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Squared segment length below which a segment is treated as a point.
pub const DEGENERATE_LEN_SQ: f64 = 1e-20;
