//! Reporting view of a route.

use std::fmt;

use serde::Serialize;

use super::{Load, Route};

/// The load identifiers of one route, in service order.
///
/// Displays as `[id1,id2,...]`: comma-joined, no spaces.
///
/// # Examples
///
/// ```
/// use load_routing::models::Schedule;
///
/// let s = Schedule::new(vec!["4".into(), "1".into(), "9".into()]);
/// assert_eq!(s.to_string(), "[4,1,9]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule(Vec<String>);

impl Schedule {
    /// Wraps an ordered list of load identifiers.
    pub fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    /// Identifiers in service order.
    pub fn ids(&self) -> &[String] {
        &self.0
    }

    /// Consumes the schedule, returning the identifiers.
    pub fn into_ids(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(","))
    }
}

/// Maps each route's load indices to load identifiers.
///
/// Routes are visited in the order given and each route keeps its internal
/// order; nothing is sorted.
///
/// # Panics
///
/// Panics if a route refers to a load index outside `loads`.
pub fn extract_schedules(routes: &[Route], loads: &[Load]) -> Vec<Schedule> {
    routes
        .iter()
        .map(|route| {
            Schedule::new(
                route
                    .loads()
                    .iter()
                    .map(|&idx| loads[idx].id().to_string())
                    .collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn loads() -> Vec<Load> {
        ["north", "south", "east", "west"]
            .iter()
            .map(|id| Load::new(*id, Point::ORIGIN, Point::ORIGIN))
            .collect()
    }

    #[test]
    fn test_extract_preserves_route_order() {
        let routes = vec![
            Route::new(vec![3, 0], 0.0, Point::ORIGIN),
            Route::new(vec![2], 0.0, Point::ORIGIN),
            Route::new(vec![1], 0.0, Point::ORIGIN),
        ];
        let schedules = extract_schedules(&routes, &loads());
        assert_eq!(schedules.len(), 3);
        assert_eq!(schedules[0].ids(), &["west", "north"]);
        assert_eq!(schedules[1].ids(), &["east"]);
        assert_eq!(schedules[2].ids(), &["south"]);
    }

    #[test]
    fn test_extract_duplicate_ids_kept() {
        let loads = vec![
            Load::new("x", Point::ORIGIN, Point::ORIGIN),
            Load::new("x", Point::ORIGIN, Point::ORIGIN),
        ];
        let routes = vec![Route::new(vec![1, 0], 0.0, Point::ORIGIN)];
        let schedules = extract_schedules(&routes, &loads);
        assert_eq!(schedules[0].clone().into_ids(), vec!["x", "x"]);
    }

    #[test]
    fn test_extract_no_routes() {
        assert!(extract_schedules(&[], &loads()).is_empty());
    }

    #[test]
    fn test_display() {
        let single = Schedule::new(vec!["17".into()]);
        assert_eq!(single.to_string(), "[17]");
        assert_eq!(Schedule::new(Vec::new()).to_string(), "[]");
    }
}
