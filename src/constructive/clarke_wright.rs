//! Clarke-Wright savings for pickup-and-dropoff loads.
//!
//! # Algorithm
//!
//! Every load starts on its own route (depot → pickup → dropoff → depot).
//! Savings are ranked in decreasing order and consumed once each. For a
//! saving `(i, j)` the route holding `i` and the route holding `j` are
//! concatenated, `i`'s route first, if the combined round trip stays
//! within the distance cap. A rejected pair is never revisited, and merged
//! routes are never re-sequenced.
//!
//! Routes live in an arena indexed by [`RouteId`]. A merge retires both
//! source handles and allocates a new one, so a handle never refers to two
//! different routes over a run.
//!
//! # Complexity
//!
//! Ranking the n(n-1)/2 savings dominates at O(n² log n). Each saving
//! then costs one walk of the two candidate routes, and an accepted merge
//! also repoints the owner of every load on the new route.
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use tracing::{debug, info, info_span};

use super::savings::{compute_savings, rank_savings, Saving};
use crate::config::SavingsConfig;
use crate::evaluation::{MergeCandidate, RouteEvaluator};
use crate::models::{Load, Route, RouteId, Solution};

/// What happened when a saving was applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MergeOutcome {
    /// Both loads were already on the same route; nothing changed.
    SameRoute,
    /// The two routes were replaced by the route with this handle.
    Merged(RouteId),
    /// The combined route would exceed the cap; nothing changed.
    OverCap {
        /// Round-trip distance the merged route would have had.
        candidate: f64,
    },
}

/// Tally of a [`MergeEngine::run`] pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub merged: usize,
    pub same_route: usize,
    pub over_cap: usize,
}

/// Owns the partition of loads into routes and applies savings to it.
///
/// # Examples
///
/// ```
/// use load_routing::config::SavingsConfig;
/// use load_routing::constructive::{MergeEngine, MergeOutcome, Saving};
/// use load_routing::models::{Load, Point, RouteId};
///
/// let loads = vec![
///     Load::new("a", Point::new(1.0, 0.0), Point::new(2.0, 0.0)),
///     Load::new("b", Point::new(2.0, 0.0), Point::new(3.0, 0.0)),
/// ];
/// let mut engine = MergeEngine::new(&loads, &SavingsConfig::default());
/// let saving = Saving::new(0, 1, 2.0).unwrap();
///
/// assert_eq!(engine.apply(&saving), MergeOutcome::Merged(RouteId::new(2)));
/// assert_eq!(engine.apply(&saving), MergeOutcome::SameRoute);
/// assert_eq!(engine.num_live_routes(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MergeEngine<'a> {
    evaluator: RouteEvaluator<'a>,
    max_distance: f64,
    routes: Vec<Option<Route>>,
    owner: Vec<RouteId>,
}

impl<'a> MergeEngine<'a> {
    /// Puts every load on its own route. Load `k` starts on `RouteId(k)`.
    pub fn new(loads: &'a [Load], config: &SavingsConfig) -> Self {
        let evaluator = RouteEvaluator::new(loads, config.depot());
        let routes = (0..loads.len())
            .map(|idx| Some(evaluator.singleton(idx)))
            .collect();
        let owner = (0..loads.len()).map(RouteId::new).collect();
        Self {
            evaluator,
            max_distance: config.max_distance(),
            routes,
            owner,
        }
    }

    /// Handle of the route currently serving `load_idx`.
    ///
    /// # Panics
    ///
    /// Panics if `load_idx` is out of bounds.
    pub fn owner_of(&self, load_idx: usize) -> RouteId {
        self.owner[load_idx]
    }

    /// The live route behind `id`, or `None` once it has been retired.
    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id.index()).and_then(Option::as_ref)
    }

    /// Live routes in handle order.
    pub fn live_routes(&self) -> impl Iterator<Item = (RouteId, &Route)> + '_ {
        self.routes
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|r| (RouteId::new(idx), r)))
    }

    /// Number of live routes.
    pub fn num_live_routes(&self) -> usize {
        self.routes.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of handles allocated so far, live or retired.
    pub fn num_allocated(&self) -> usize {
        self.routes.len()
    }

    /// Serves `first` then `second` on one vehicle if the round trip stays
    /// within the cap.
    ///
    /// Returns the concatenated route, or `None` if it would be too long.
    /// The inputs are not modified either way.
    pub fn attempt_merge(&self, first: &Route, second: &Route) -> Option<Route> {
        let candidate = self.evaluator.merge_candidate(first, second);
        self.accept(first, second, candidate)
    }

    /// Applies one saving to the partition.
    pub fn apply(&mut self, saving: &Saving) -> MergeOutcome {
        let first_id = self.owner[saving.i()];
        let second_id = self.owner[saving.j()];
        if first_id == second_id {
            return MergeOutcome::SameRoute;
        }

        let attempt = {
            // Owners always name live routes; a stale handle is treated
            // like a pair that is already joined.
            let (Some(first), Some(second)) = (self.route(first_id), self.route(second_id))
            else {
                return MergeOutcome::SameRoute;
            };
            let candidate = self.evaluator.merge_candidate(first, second);
            self.accept(first, second, candidate)
                .ok_or(candidate.total_distance)
        };

        match attempt {
            Ok(merged) => MergeOutcome::Merged(self.replace(first_id, second_id, merged)),
            Err(candidate) => MergeOutcome::OverCap { candidate },
        }
    }

    /// Applies every saving once, in the given order.
    pub fn run(&mut self, savings: &[Saving]) -> MergeStats {
        let mut stats = MergeStats::default();
        for saving in savings {
            match self.apply(saving) {
                MergeOutcome::SameRoute => stats.same_route += 1,
                MergeOutcome::Merged(id) => {
                    stats.merged += 1;
                    debug!(
                        i = saving.i(),
                        j = saving.j(),
                        saving = saving.value(),
                        route = %id,
                        "merged routes"
                    );
                }
                MergeOutcome::OverCap { candidate } => {
                    stats.over_cap += 1;
                    debug!(
                        i = saving.i(),
                        j = saving.j(),
                        candidate,
                        max_distance = self.max_distance,
                        "merge rejected"
                    );
                }
            }
        }
        stats
    }

    /// Final routes in handle order.
    pub fn into_solution(self) -> Solution {
        let baseline = self.evaluator.baseline_distance();
        Solution::new(self.routes.into_iter().flatten().collect(), baseline)
    }

    fn accept(&self, first: &Route, second: &Route, candidate: MergeCandidate) -> Option<Route> {
        if candidate.total_distance > self.max_distance {
            return None;
        }
        let mut loads = Vec::with_capacity(first.len() + second.len());
        loads.extend_from_slice(first.loads());
        loads.extend_from_slice(second.loads());
        Some(Route::new(
            loads,
            candidate.total_distance,
            candidate.last_dropoff,
        ))
    }

    fn replace(&mut self, first_id: RouteId, second_id: RouteId, merged: Route) -> RouteId {
        self.routes[first_id.index()] = None;
        self.routes[second_id.index()] = None;

        let id = RouteId::new(self.routes.len());
        for &idx in merged.loads() {
            self.owner[idx] = id;
        }
        self.routes.push(Some(merged));
        id
    }
}

/// Builds routes from already-ranked savings.
///
/// Starts from one route per load and applies `savings` in order.
pub fn merge_routes(loads: &[Load], savings: &[Saving], config: &SavingsConfig) -> Solution {
    let mut engine = MergeEngine::new(loads, config);
    engine.run(savings);
    engine.into_solution()
}

/// Routes loads with the Clarke-Wright savings heuristic.
///
/// Computes all pairwise savings, ranks them, and greedily merges routes
/// while each stays within `config.max_distance()`.
///
/// # Examples
///
/// ```
/// use load_routing::config::SavingsConfig;
/// use load_routing::constructive::clarke_wright_savings;
/// use load_routing::models::{Load, Point};
///
/// let loads = vec![
///     Load::new("A", Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
///     Load::new("B", Point::new(1.0, 1.0), Point::new(2.0, 2.0)),
///     Load::new("C", Point::new(2.0, 2.0), Point::new(3.0, 3.0)),
/// ];
/// let solution = clarke_wright_savings(&loads, &SavingsConfig::default());
/// assert_eq!(solution.num_routes(), 1);
/// assert_eq!(solution.schedules(&loads)[0].to_string(), "[A,B,C]");
/// ```
pub fn clarke_wright_savings(loads: &[Load], config: &SavingsConfig) -> Solution {
    let _span = info_span!("savings_solve", loads = loads.len()).entered();

    let mut savings = compute_savings(loads, config.depot());
    rank_savings(&mut savings, config.tie_break());

    let mut engine = MergeEngine::new(loads, config);
    let stats = engine.run(&savings);
    let solution = engine.into_solution();

    info!(
        routes = solution.num_routes(),
        merged = stats.merged,
        rejected = stats.over_cap,
        total_distance = solution.total_distance(),
        baseline_distance = solution.baseline_distance(),
        "savings solve finished"
    );
    solution
}
