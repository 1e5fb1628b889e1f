//! Solution type.

use super::{extract_schedules, Load, Route, Schedule};

/// The routes produced by a solver run.
///
/// Routes are kept in the order the solver produced them, which has no
/// relation to load order. The baseline distance (every load on its own
/// vehicle) is kept alongside so the reduction can be reported.
///
/// # Examples
///
/// ```
/// use load_routing::models::{Point, Route, Solution};
///
/// let sol = Solution::new(
///     vec![Route::new(vec![0, 1], 10.0, Point::ORIGIN)],
///     16.0,
/// );
/// assert_eq!(sol.num_routes(), 1);
/// assert!((sol.distance_saved() - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solution {
    routes: Vec<Route>,
    baseline_distance: f64,
}

impl Solution {
    /// Creates a solution from final routes and the one-vehicle-per-load
    /// distance they are compared against.
    pub fn new(routes: Vec<Route>, baseline_distance: f64) -> Self {
        Self {
            routes,
            baseline_distance,
        }
    }

    /// Returns the routes in this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of loads served across all routes.
    pub fn num_loads(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }

    /// Total distance across all routes.
    pub fn total_distance(&self) -> f64 {
        self.routes.iter().map(|r| r.total_distance()).sum()
    }

    /// Distance if every load had its own vehicle.
    pub fn baseline_distance(&self) -> f64 {
        self.baseline_distance
    }

    /// Baseline minus total distance.
    pub fn distance_saved(&self) -> f64 {
        self.baseline_distance - self.total_distance()
    }

    /// Returns `true` if every index in `0..num_loads` appears in exactly
    /// one route, exactly once, and nothing else does.
    pub fn is_partition_of(&self, num_loads: usize) -> bool {
        let mut seen = vec![false; num_loads];
        for route in &self.routes {
            for &idx in route.loads() {
                match seen.get_mut(idx) {
                    Some(slot) if !*slot => *slot = true,
                    _ => return false,
                }
            }
        }
        seen.into_iter().all(|s| s)
    }

    /// Load identifiers for each route, in route order.
    pub fn schedules(&self, loads: &[Load]) -> Vec<Schedule> {
        extract_schedules(&self.routes, loads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn route(loads: Vec<usize>, d: f64) -> Route {
        Route::new(loads, d, Point::ORIGIN)
    }

    #[test]
    fn test_solution_empty() {
        let sol = Solution::default();
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.num_loads(), 0);
        assert_eq!(sol.total_distance(), 0.0);
        assert!(sol.is_partition_of(0));
    }

    #[test]
    fn test_solution_totals() {
        let sol = Solution::new(vec![route(vec![0], 50.0), route(vec![2, 1], 80.0)], 200.0);
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.num_loads(), 3);
        assert!((sol.total_distance() - 130.0).abs() < 1e-10);
        assert!((sol.distance_saved() - 70.0).abs() < 1e-10);
    }

    #[test]
    fn test_partition_ok() {
        let sol = Solution::new(vec![route(vec![2, 0], 0.0), route(vec![1], 0.0)], 0.0);
        assert!(sol.is_partition_of(3));
    }

    #[test]
    fn test_partition_duplicate() {
        let sol = Solution::new(vec![route(vec![0, 1], 0.0), route(vec![1], 0.0)], 0.0);
        assert!(!sol.is_partition_of(2));
    }

    #[test]
    fn test_partition_missing() {
        let sol = Solution::new(vec![route(vec![0], 0.0)], 0.0);
        assert!(!sol.is_partition_of(2));
    }

    #[test]
    fn test_partition_out_of_range() {
        let sol = Solution::new(vec![route(vec![0, 5], 0.0)], 0.0);
        assert!(!sol.is_partition_of(2));
    }

    #[test]
    fn test_schedules() {
        let loads = vec![
            Load::new("a", Point::ORIGIN, Point::ORIGIN),
            Load::new("b", Point::ORIGIN, Point::ORIGIN),
        ];
        let sol = Solution::new(vec![route(vec![1, 0], 0.0)], 0.0);
        assert_eq!(sol.schedules(&loads)[0].to_string(), "[b,a]");
    }
}
