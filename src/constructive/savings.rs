//! Pairwise savings between loads.
//!
//! The saving of serving load `i` immediately before load `j` on one
//! vehicle is
//!
//! ```text
//! s(i, j) = d(depot, pickup_i) + d(dropoff_j, depot) - d(dropoff_i, pickup_j)
//! ```
//!
//! The value is directional. Only pairs with `i < j` are evaluated; the
//! reverse orientation is never considered.

use crate::config::TieBreak;
use crate::models::{Load, Point};

/// The estimated benefit of serving load `i` directly before load `j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    i: usize,
    j: usize,
    value: f64,
}

impl Saving {
    /// Creates a saving for the ordered pair `(i, j)`.
    ///
    /// Returns `None` unless `i < j`.
    pub fn new(i: usize, j: usize, value: f64) -> Option<Self> {
        if i >= j {
            return None;
        }
        Some(Self { i, j, value })
    }

    /// Index of the load served first.
    pub fn i(&self) -> usize {
        self.i
    }

    /// Index of the load served second.
    pub fn j(&self) -> usize {
        self.j
    }

    /// Saving value; larger is better.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Computes the saving of every pair `(i, j)` with `i < j`.
///
/// The result has `n * (n - 1) / 2` entries, generated in nested ascending
/// order: `(0,1), (0,2), ..., (1,2), ...`.
///
/// # Examples
///
/// ```
/// use load_routing::constructive::compute_savings;
/// use load_routing::models::{Load, Point};
///
/// let loads = vec![
///     Load::new("a", Point::new(1.0, 1.0), Point::new(2.0, 2.0)),
///     Load::new("b", Point::new(2.0, 3.0), Point::new(3.0, 4.0)),
/// ];
/// let savings = compute_savings(&loads, Point::ORIGIN);
/// assert_eq!(savings.len(), 1);
/// assert!((savings[0].value() - 5.414213562373095).abs() < 1e-9);
/// ```
pub fn compute_savings(loads: &[Load], depot: Point) -> Vec<Saving> {
    let n = loads.len();
    let mut savings = Vec::with_capacity(n * n.saturating_sub(1) / 2);

    for i in 0..n {
        let depot_to_i = depot.distance_to(loads[i].pickup());
        let i_dropoff = loads[i].dropoff();
        for j in (i + 1)..n {
            let j_to_depot = loads[j].dropoff().distance_to(depot);
            let i_to_j = i_dropoff.distance_to(loads[j].pickup());
            savings.push(Saving {
                i,
                j,
                value: depot_to_i + j_to_depot - i_to_j,
            });
        }
    }

    savings
}

/// Sorts savings by decreasing value.
///
/// Values are compared with [`f64::total_cmp`], so NaN never panics the
/// sort. With [`TieBreak::GenerationOrder`] the sort is stable and equal
/// savings stay in the order [`compute_savings`] produced them.
pub fn rank_savings(savings: &mut [Saving], tie_break: TieBreak) {
    match tie_break {
        TieBreak::GenerationOrder => savings.sort_by(|a, b| b.value.total_cmp(&a.value)),
        TieBreak::Unstable => savings.sort_unstable_by(|a, b| b.value.total_cmp(&a.value)),
    }
}
