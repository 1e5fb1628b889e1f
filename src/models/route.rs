//! Route and route handle types.

use std::fmt;

use super::Point;

/// Handle identifying a route inside the merge engine's arena.
///
/// Handles are allocated in increasing order and never reused: a merged
/// route always receives a fresh handle, and the two handles it replaces
/// are retired for good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RouteId(usize);

impl RouteId {
    /// Creates a handle from its raw arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw arena index.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route#{}", self.0)
    }
}

/// An ordered sequence of loads served by one vehicle.
///
/// The vehicle leaves the depot, serves each load (pickup then dropoff) in
/// order, and returns to the depot. Neither depot visit is stored in
/// `loads`. The order is fixed at construction; routes are replaced, not
/// edited, when merged.
///
/// # Examples
///
/// ```
/// use load_routing::models::{Point, Route};
///
/// let route = Route::new(vec![2, 0], 42.0, Point::new(1.0, 1.0));
/// assert_eq!(route.loads(), &[2, 0]);
/// assert_eq!(route.first_load(), Some(2));
/// assert_eq!(route.last_load(), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    loads: Vec<usize>,
    total_distance: f64,
    last_dropoff: Point,
}

impl Route {
    /// Creates a route from load indices, its round-trip distance, and the
    /// dropoff location of its final load.
    pub fn new(loads: Vec<usize>, total_distance: f64, last_dropoff: Point) -> Self {
        Self {
            loads,
            total_distance,
            last_dropoff,
        }
    }

    /// Load indices in service order.
    pub fn loads(&self) -> &[usize] {
        &self.loads
    }

    /// Number of loads on this route.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if this route serves no loads.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// First load served, if any.
    pub fn first_load(&self) -> Option<usize> {
        self.loads.first().copied()
    }

    /// Last load served, if any.
    pub fn last_load(&self) -> Option<usize> {
        self.loads.last().copied()
    }

    /// Round-trip distance, depot to depot.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Where the vehicle is after its final dropoff.
    pub fn last_dropoff(&self) -> Point {
        self.last_dropoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new(Vec::new(), 0.0, Point::ORIGIN);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.first_load(), None);
        assert_eq!(r.last_load(), None);
    }

    #[test]
    fn test_route_accessors() {
        let r = Route::new(vec![4, 1, 3], 99.5, Point::new(2.0, -1.0));
        assert_eq!(r.len(), 3);
        assert_eq!(r.first_load(), Some(4));
        assert_eq!(r.last_load(), Some(3));
        assert_eq!(r.total_distance(), 99.5);
        assert_eq!(r.last_dropoff(), Point::new(2.0, -1.0));
    }

    #[test]
    fn test_route_id_order() {
        let a = RouteId::new(3);
        let b = RouteId::new(7);
        assert!(a < b);
        assert_eq!(b.index(), 7);
        assert_eq!(a.to_string(), "route#3");
    }
}
