//! Route evaluator that computes travel distance for load sequences.

use crate::models::{Load, Point, Route};

/// Distance of serving `load_ids` in order, starting at `start`.
///
/// Each load adds the leg from the current position to its pickup and the
/// loaded leg from pickup to dropoff; the vehicle then stands at the
/// dropoff. The return to the depot is not included. An empty sequence
/// costs nothing.
///
/// # Panics
///
/// Panics if an index is out of bounds for `loads`.
///
/// # Examples
///
/// ```
/// use load_routing::evaluation::route_distance;
/// use load_routing::models::{Load, Point};
///
/// let loads = vec![Load::new("a", Point::new(3.0, 4.0), Point::new(3.0, 0.0))];
/// let d = route_distance(&[0], &loads, Point::ORIGIN);
/// assert!((d - 9.0).abs() < 1e-10);
/// ```
pub fn route_distance(load_ids: &[usize], loads: &[Load], start: Point) -> f64 {
    let mut total = 0.0;
    let mut current = start;
    for &idx in load_ids {
        let load = &loads[idx];
        total += current.distance_to(load.pickup());
        total += load.length();
        current = load.dropoff();
    }
    total
}

/// The outcome of evaluating two routes served back to back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeCandidate {
    /// Depot to depot distance of the concatenated route.
    pub total_distance: f64,
    /// Vehicle position before the final return to the depot.
    pub last_dropoff: Point,
}

/// Evaluates load sequences against a fixed depot.
///
/// # Examples
///
/// ```
/// use load_routing::models::{Load, Point};
/// use load_routing::evaluation::RouteEvaluator;
///
/// let loads = vec![
///     Load::new("a", Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
///     Load::new("b", Point::new(2.0, 0.0), Point::new(3.0, 0.0)),
/// ];
/// let evaluator = RouteEvaluator::new(&loads, Point::ORIGIN);
/// let route = evaluator.build_route(&[0, 1]);
/// assert!((route.total_distance() - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'a> {
    loads: &'a [Load],
    depot: Point,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given loads and depot.
    pub fn new(loads: &'a [Load], depot: Point) -> Self {
        Self { loads, depot }
    }

    /// Loads being evaluated.
    pub fn loads(&self) -> &'a [Load] {
        self.loads
    }

    /// Depot every route starts and ends at.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// The route serving only `load_idx`.
    pub fn singleton(&self, load_idx: usize) -> Route {
        let load = &self.loads[load_idx];
        Route::new(
            vec![load_idx],
            load.round_trip(self.depot),
            load.dropoff(),
        )
    }

    /// Builds a route serving `load_ids` in order, with its round-trip
    /// distance computed from scratch.
    pub fn build_route(&self, load_ids: &[usize]) -> Route {
        let last_dropoff = self.end_of(load_ids, self.depot);
        let total = route_distance(load_ids, self.loads, self.depot)
            + last_dropoff.distance_to(self.depot);
        Route::new(load_ids.to_vec(), total, last_dropoff)
    }

    /// Evaluates serving `first` and then `second` in one trip.
    ///
    /// The vehicle runs `first` from the depot, drives from its last
    /// dropoff to the first pickup of `second`, runs `second`, and returns
    /// to the depot. Neither route's cached distance is trusted; both are
    /// walked again.
    pub fn merge_candidate(&self, first: &Route, second: &Route) -> MergeCandidate {
        let mut total = route_distance(first.loads(), self.loads, self.depot);
        let mut current = self.end_of(first.loads(), self.depot);

        if let Some(head) = second.first_load() {
            let pickup = self.loads[head].pickup();
            total += current.distance_to(pickup);
            current = pickup;
        }

        total += route_distance(second.loads(), self.loads, current);
        current = self.end_of(second.loads(), current);
        total += current.distance_to(self.depot);

        MergeCandidate {
            total_distance: total,
            last_dropoff: current,
        }
    }

    /// Sum of single-load round trips over every load.
    pub fn baseline_distance(&self) -> f64 {
        self.loads.iter().map(|l| l.round_trip(self.depot)).sum()
    }

    fn end_of(&self, load_ids: &[usize], start: Point) -> Point {
        load_ids
            .last()
            .map_or(start, |&idx| self.loads[idx].dropoff())
    }
}
