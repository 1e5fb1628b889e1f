//! Euclidean distance.

use crate::models::Point;

/// Straight-line distance between two points.
///
/// # Examples
///
/// ```
/// use load_routing::distance::euclidean;
/// use load_routing::models::Point;
///
/// let d = euclidean(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    (dx * dx + dy * dy).sqrt()
}
