use nalgebra::{Affine2, Isometry2, Matrix3, Similarity2, Vector3};

use super::Point2;

/// Maps a point from shape coordinates to output (usually screen) coordinates.
///
/// Cursors treat implementors as opaque and call [`apply`](Self::apply) once
/// per emitted vertex.
pub trait PointTransform {
    /// Returns the image of `point`.
    fn apply(&self, point: Point2) -> Point2;
}

impl PointTransform for Affine2<f64> {
    fn apply(&self, point: Point2) -> Point2 {
        self.transform_point(&point)
    }
}

impl PointTransform for Similarity2<f64> {
    fn apply(&self, point: Point2) -> Point2 {
        self.transform_point(&point)
    }
}

impl PointTransform for Isometry2<f64> {
    fn apply(&self, point: Point2) -> Point2 {
        self.transform_point(&point)
    }
}

/// Homogeneous 3x3 matrix.
impl PointTransform for Matrix3<f64> {
    fn apply(&self, point: Point2) -> Point2 {
        let v = self * Vector3::new(point.x, point.y, 1.0);
        Point2::new(v.x / v.z, v.y / v.z)
    }
}

/// Adapts a closure into a [`PointTransform`].
#[derive(Debug, Clone, Copy)]
pub struct FnTransform<F>(pub F);

impl<F> PointTransform for FnTransform<F>
where
    F: Fn(Point2) -> Point2,
{
    fn apply(&self, point: Point2) -> Point2 {
        (self.0)(point)
    }
}
