//! Savings-based route construction.
//!
//! - [`compute_savings`] / [`rank_savings`] — pairwise savings and merge order
//! - [`MergeEngine`] — route partition and greedy merging under a distance cap
//! - [`clarke_wright_savings`] — the full pipeline, O(n² log n)

mod clarke_wright;
mod savings;

pub use clarke_wright::{
    clarke_wright_savings, merge_routes, MergeEngine, MergeOutcome, MergeStats,
};
pub use savings::{compute_savings, rank_savings, Saving};
