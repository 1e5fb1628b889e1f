//! Plane geometry for routing.
//!
//! All travel is straight-line Euclidean distance between coordinates.

mod geometry;

pub use geometry::euclidean;
