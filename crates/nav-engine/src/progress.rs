//! Engine-owned per-route progress record.
//!
//! Routes are immutable after planning, so completion state lives here
//! instead of on the steps themselves.  Resetting progress replays the same
//! route from the top.

/// Live progress through a route's steps.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RouteProgress {
    /// 0-based index into the route's steps.
    pub step_index: usize,

    /// Metres accrued within the *current* step only; resets to 0 on
    /// advance.  Movement while heading the wrong way is not accrued.
    pub distance_traveled_m: f64,

    /// Completion flag per step, indexed like the route's steps.
    pub completed: Vec<bool>,
}

impl RouteProgress {
    /// Fresh progress for a route with `step_count` steps.
    pub fn new(step_count: usize) -> Self {
        Self {
            step_index: 0,
            distance_traveled_m: 0.0,
            completed: vec![false; step_count],
        }
    }

    /// `true` once every step is completed.
    pub fn is_finished(&self) -> bool {
        self.completed.iter().all(|&c| c)
    }

    /// Mark the current step completed.  Returns `true` if a following step
    /// exists (and moves onto it, zeroing the distance accumulator).
    pub(crate) fn complete_current(&mut self) -> bool {
        if let Some(flag) = self.completed.get_mut(self.step_index) {
            *flag = true;
        }
        if self.step_index + 1 < self.completed.len() {
            self.step_index += 1;
            self.distance_traveled_m = 0.0;
            true
        } else {
            false
        }
    }
}
