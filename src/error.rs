use thiserror::Error;

/// Top-level error type for polygon approximation.
#[derive(Debug, Error)]
pub enum PolyApproxError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Violations of the ring store layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("marker count {markers} does not match vertex count {vertices}")]
    MarkerCountMismatch { vertices: usize, markers: usize },

    #[error("first vertex is not marked as a ring start")]
    MissingRingStart,

    #[error("found {found} ring starts, expected {expected}")]
    RingCountMismatch { expected: usize, found: usize },
}

/// Errors raised while pulling commands from a path cursor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("poly approx iterator out of bounds")]
    NoSuchElement,

    #[error("unsupported operation: {0}")]
    UnsupportedOperation(&'static str),
}

/// Convenience type alias for results using [`PolyApproxError`].
pub type Result<T> = std::result::Result<T, PolyApproxError>;
