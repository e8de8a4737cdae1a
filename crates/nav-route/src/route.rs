//! Route and step types produced by the planner.

use nav_core::Direction;

/// Average walking speed used for time estimates, metres per minute.
pub const AVERAGE_WALKING_SPEED_M_PER_MIN: f64 = 80.0;

/// One leg of a route: a single edge traversal with its instruction text.
///
/// Steps carry no completion flag — per-step progress is owned by the
/// navigation engine, keeping routes immutable and replayable.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NavigationStep {
    /// 1-based, sequential within the route.
    pub step_number: u32,
    pub instruction: String,
    pub distance_m: f64,
    pub direction: Direction,
    pub from_node: String,
    pub to_node: String,
}

/// The planner's output: an ordered start-to-end sequence of steps.
///
/// Invariant: steps are contiguous — `steps[i].to_node ==
/// steps[i+1].from_node` — and `distance_m` equals the sum of the
/// constituent step distances.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Route {
    /// Derived key, `"{start}_to_{end}"`.
    pub id: String,
    pub start: String,
    pub end: String,
    /// Total walking distance in metres.
    pub distance_m: f64,
    pub steps: Vec<NavigationStep>,
    /// `true` iff the route was computed under the accessibility constraint.
    pub accessible: bool,
    /// Walking-time estimate in whole minutes (ceiling).
    pub estimated_time_min: u32,
}

impl Route {
    /// `true` if start and end are the same node (zero steps).
    pub fn is_trivial(&self) -> bool {
        self.steps.is_empty()
    }

    /// Walking-time estimate for `distance_m` metres, in whole minutes.
    pub(crate) fn estimate_minutes(distance_m: f64) -> u32 {
        (distance_m / AVERAGE_WALKING_SPEED_M_PER_MIN).ceil() as u32
    }
}
