//! Pickup-and-dropoff loads.

use serde::{Deserialize, Serialize};

use super::Point;

/// A single delivery task: drive to `pickup`, then carry the load to
/// `dropoff`.
///
/// Loads are immutable once created. The solver refers to a load by its
/// position in the input slice, never by `id`; identifiers are only used
/// for reporting and need not be unique.
///
/// # Examples
///
/// ```
/// use load_routing::models::{Load, Point};
///
/// let load = Load::new("7", Point::new(0.0, 3.0), Point::new(4.0, 3.0));
/// assert_eq!(load.id(), "7");
/// assert!((load.length() - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    id: String,
    pickup: Point,
    dropoff: Point,
}

impl Load {
    /// Creates a load.
    pub fn new(id: impl Into<String>, pickup: Point, dropoff: Point) -> Self {
        Self {
            id: id.into(),
            pickup,
            dropoff,
        }
    }

    /// Identifier as given in the input.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Pickup location.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Dropoff location.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Loaded distance, pickup to dropoff.
    pub fn length(&self) -> f64 {
        self.pickup.distance_to(self.dropoff)
    }

    /// Distance of serving this load alone: depot, pickup, dropoff, depot.
    pub fn round_trip(&self, depot: Point) -> f64 {
        depot.distance_to(self.pickup) + self.length() + self.dropoff.distance_to(depot)
    }
}
