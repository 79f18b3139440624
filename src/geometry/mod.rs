pub mod bounds;
pub mod ring_store;

pub use bounds::Aabb2;
pub use ring_store::{RingMarker, RingStore};
