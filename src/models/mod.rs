//! Domain model types for pickup-and-dropoff routing.
//!
//! Points and loads are immutable input data. Routes are ordered
//! sequences of load indices built by the solver, and a solution is the
//! final set of routes.

mod load;
mod point;
mod route;
mod schedule;
mod solution;

pub use load::Load;
pub use point::{ParsePointError, Point};
pub use route::{Route, RouteId};
pub use schedule::{extract_schedules, Schedule};
pub use solution::Solution;
