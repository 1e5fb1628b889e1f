//! # load-routing
//!
//! Routes pickup-and-dropoff loads from a shared depot using a
//! distance-capped Clarke-Wright savings heuristic.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, Route, Solution, Schedule)
//! - [`distance`] — Euclidean geometry
//! - [`evaluation`] — Route distance and merge candidate evaluation
//! - [`constructive`] — Savings computation, ranking, and the merge engine
//! - [`config`] — Depot, distance cap, and tie-breaking
//! - [`io`] — Load file parsing and schedule output
//! - [`generator`] — Seeded random instances
//!
//! ## Example
//!
//! ```
//! use load_routing::config::SavingsConfig;
//! use load_routing::constructive::clarke_wright_savings;
//! use load_routing::models::{Load, Point};
//!
//! let loads = vec![
//!     Load::new("1", Point::new(-50.0, 80.0), Point::new(90.0, 12.0)),
//!     Load::new("2", Point::new(-24.0, -11.0), Point::new(-90.0, -22.0)),
//! ];
//! let solution = clarke_wright_savings(&loads, &SavingsConfig::default());
//! assert!(solution.is_partition_of(loads.len()));
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod generator;
pub mod io;
pub mod models;

pub use error::{Error, Result};
