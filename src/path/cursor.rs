use std::fmt;

use tracing::trace;

use super::{PathCommand, SegmentKind, Tolerance, WindingRule};
use crate::error::{PathError, Result};
use crate::geometry::{RingMarker, RingStore};
use crate::math::distance_2d::dist_sq;
use crate::math::transform_2d::PointTransform;
use crate::math::Point2f;

/// Where a [`SimplifyingCursor`] stands in its single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Positioned on the first vertex, nothing emitted yet.
    NotStarted,
    /// Positioned on the vertex at `position`, which is the next to emit.
    Emitting { position: usize },
    /// Every vertex has been emitted or skipped. Terminal.
    Done,
}

/// Lazy, single-pass producer of a simplified path over a [`RingStore`].
///
/// After a vertex is emitted it becomes the anchor: the following vertices of
/// the same ring are skipped while their squared distance to the anchor is
/// strictly below the threshold. The first and last vertices of every ring
/// are never skipped.
///
/// The protocol is pull based: check [`has_next`](Self::has_next), read
/// [`current_command`](Self::current_command), then
/// [`advance`](Self::advance). The cursor also implements [`Iterator`].
/// It is not `Clone`; a new pass needs a new cursor.
pub struct SimplifyingCursor<'a> {
    store: &'a RingStore,
    threshold: f32,
    transform: Option<&'a dyn PointTransform>,
    winding_rule: WindingRule,
    state: CursorState,
    emitted: usize,
}

impl<'a> SimplifyingCursor<'a> {
    /// Creates a cursor positioned before the first vertex of `store`.
    ///
    /// A cursor over the empty store starts out [`CursorState::Done`].
    #[must_use]
    pub fn new(
        store: &'a RingStore,
        transform: Option<&'a dyn PointTransform>,
        tolerance: Tolerance,
        winding_rule: WindingRule,
    ) -> Self {
        let threshold = tolerance.threshold();
        let state = if store.is_empty() {
            CursorState::Done
        } else {
            CursorState::NotStarted
        };
        trace!(
            vertices = store.len(),
            threshold,
            transformed = transform.is_some(),
            "created simplifying cursor"
        );
        Self {
            store,
            threshold,
            transform,
            winding_rule,
            state,
            emitted: 0,
        }
    }

    /// Current step of the pass.
    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Index of the current vertex in the store, or `None` once done.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            CursorState::NotStarted => Some(0),
            CursorState::Emitting { position } => Some(position),
            CursorState::Done => None,
        }
    }

    /// The squared threshold this cursor skips under.
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Fill rule of the shape this cursor walks.
    #[must_use]
    pub fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    /// Returns `true` while there is a command to read.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.state != CursorState::Done
    }

    /// Moves past the current vertex, skipping same-ring vertices that lie
    /// within the threshold of it. Does nothing once done.
    pub fn advance(&mut self) {
        let anchor_index = match self.state {
            CursorState::NotStarted => 0,
            CursorState::Emitting { position } => position,
            CursorState::Done => return,
        };
        let vertices = self.store.vertices();
        let markers = self.store.markers();
        let anchor = vertices[anchor_index];

        // Neither a ring's first vertex nor its last one is ever skipped.
        let mut position = anchor_index + 1;
        while position + 1 < vertices.len()
            && markers[position] == RingMarker::RingContinue
            && markers[position + 1] == RingMarker::RingContinue
            && dist_sq(&anchor, &vertices[position]) < self.threshold
        {
            position += 1;
        }

        self.emitted += 1;
        self.state = if position < vertices.len() {
            CursorState::Emitting { position }
        } else {
            trace!(
                emitted = self.emitted,
                vertices = vertices.len(),
                "simplifying cursor done"
            );
            CursorState::Done
        };
    }

    /// Returns the command for the current vertex.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NoSuchElement`] if the cursor is done.
    pub fn current_command(&self) -> Result<PathCommand> {
        let position = self.current_index().ok_or(PathError::NoSuchElement)?;
        let vertex = self.store.vertices()[position];
        Ok(PathCommand {
            kind: SegmentKind::from(self.store.markers()[position]),
            point: self.transformed(vertex),
        })
    }

    /// Writes the current point into `coords` and returns its kind.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NoSuchElement`] if the cursor is done.
    pub fn current_segment(&self, coords: &mut [f32; 2]) -> Result<SegmentKind> {
        let command = self.current_command()?;
        *coords = [command.point.x, command.point.y];
        Ok(command.kind)
    }

    /// Double-precision variant of [`current_segment`](Self::current_segment).
    ///
    /// Vertices are stored in single precision, so this always fails rather
    /// than widening.
    ///
    /// # Errors
    ///
    /// Always returns [`PathError::UnsupportedOperation`].
    pub fn current_segment_f64(&self, _coords: &mut [f64; 2]) -> Result<SegmentKind> {
        Err(PathError::UnsupportedOperation("double-precision path segments").into())
    }

    fn transformed(&self, vertex: Point2f) -> Point2f {
        match self.transform {
            Some(transform) => transform.apply(vertex.cast()).cast(),
            None => vertex,
        }
    }
}

impl Iterator for SimplifyingCursor<'_> {
    type Item = PathCommand;

    fn next(&mut self) -> Option<PathCommand> {
        let command = self.current_command().ok()?;
        self.advance();
        Some(command)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.current_index() {
            Some(position) => {
                // The current vertex and the store's last vertex are always emitted.
                let remaining = self.store.len() - position;
                (remaining.min(2), Some(remaining))
            }
            None => (0, Some(0)),
        }
    }
}

impl std::iter::FusedIterator for SimplifyingCursor<'_> {}

impl fmt::Debug for SimplifyingCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimplifyingCursor")
            .field("vertices", &self.store.len())
            .field("threshold", &self.threshold)
            .field("transformed", &self.transform.is_some())
            .field("winding_rule", &self.winding_rule)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
