mod cursor;
mod tolerance;

pub use cursor::{CursorState, SimplifyingCursor};
pub use tolerance::{RenderParams, Tolerance};

use crate::geometry::RingMarker;
use crate::math::Point2f;

/// Kind of a path command handed to the painter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Starts a new, disconnected subpath.
    MoveTo,
    /// Straight segment from the previous point.
    LineTo,
}

impl From<RingMarker> for SegmentKind {
    fn from(marker: RingMarker) -> Self {
        match marker {
            RingMarker::RingStart => SegmentKind::MoveTo,
            RingMarker::RingContinue => SegmentKind::LineTo,
        }
    }
}

/// A single command of a simplified path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCommand {
    pub kind: SegmentKind,
    /// The vertex, already mapped through the cursor's transform.
    pub point: Point2f,
}

/// Fill rule the painter should use for the produced path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindingRule {
    /// Inner rings cut holes into outer rings.
    EvenOdd,
    /// Every ring adds to the fill by its orientation.
    NonZero,
}
