//! Route distance evaluation.
//!
//! - [`route_distance`] — distance of serving loads in order from a start point
//! - [`RouteEvaluator`] — depot-aware round trips and merge candidates

mod evaluator;

pub use evaluator::{route_distance, MergeCandidate, RouteEvaluator};
