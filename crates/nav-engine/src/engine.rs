//! The navigation state machine.
//!
//! # States
//!
//! Conceptually `idle` ↔ `navigating`, with two orthogonal sub-states while
//! navigating: heading-correct / heading-wrong (hysteresis via edge
//! triggering) and per-step pending / completed (in [`RouteProgress`]).
//!
//! # Per-sample pipeline (`update_location`)
//!
//! 1. reject samples whose timestamp runs backwards;
//! 2. distance moved since the previous fix (haversine) and a speed estimate
//!    from real elapsed time;
//! 3. direction check — may flip the wrong-direction flag and fire an
//!    announcement on the *transition* only;
//! 4. distance accrual, gated on heading the right way — metres walked the
//!    wrong way never count toward completing the correct step;
//! 5. nearby-event scan (each event node announces at most once per session);
//! 6. step completion test and auto-advance / arrival.

use std::collections::HashSet;

use nav_core::{DIRECTION_TOLERANCE_DEG, is_correct_direction};
use nav_map::{CampusMap, CampusNode};
use nav_route::{NavigationStep, Route};

use crate::guidance::GuidanceSink;
use crate::location::UserLocation;
use crate::progress::RouteProgress;
use crate::{EngineError, EngineResult};

// ── Tuning constants ──────────────────────────────────────────────────────────

/// Forgiveness margin for GPS noise: a step of distance D completes once
/// D − threshold metres have been accrued.
pub const STEP_COMPLETION_THRESHOLD_M: f64 = 5.0;

/// Straight-line range within which an event node is announced.
pub const NEARBY_EVENT_THRESHOLD_M: f64 = 20.0;

/// Below this estimated speed the walker counts as stationary and the
/// direction check is skipped — a compass fix is only meaningful in motion.
pub const MIN_SPEED_FOR_DIRECTION_CHECK_M_S: f64 = 0.3;

// ── Engine ────────────────────────────────────────────────────────────────────

/// Tracks one walker along one route, fed by serialized location samples.
///
/// # Type parameter
///
/// `G` is the guidance sink receiving announcements (voice, haptics, a test
/// recorder).  It is a plain owned field so headless use is just
/// `NavigationEngine::new(NoopGuidance)`.
pub struct NavigationEngine<G: GuidanceSink> {
    /// The announcement sink.  Public so callers can inspect or reconfigure
    /// their own sink implementation between sessions.
    pub sink: G,

    route: Option<Route>,
    start_node: Option<CampusNode>,
    destination: Option<CampusNode>,
    progress: RouteProgress,
    navigating: bool,

    last_location: Option<UserLocation>,
    last_speed_m_s: f64,
    wrong_direction: bool,
    announced_events: HashSet<String>,
}

impl<G: GuidanceSink> NavigationEngine<G> {
    /// Create an idle engine.
    pub fn new(sink: G) -> Self {
        Self {
            sink,
            route: None,
            start_node: None,
            destination: None,
            progress: RouteProgress::new(0),
            navigating: false,
            last_location: None,
            last_speed_m_s: 0.0,
            wrong_direction: false,
            announced_events: HashSet::new(),
        }
    }

    // ── Session control ───────────────────────────────────────────────────

    /// Begin navigating `route` from `start` to `destination`.
    ///
    /// Fully replaces any prior session: all accumulators reset, the
    /// announced-events set clears, and the first step's instruction is
    /// emitted immediately (if the route has any steps).
    ///
    /// # Errors
    ///
    /// The route's endpoints must match the supplied nodes.
    pub fn start_navigation(
        &mut self,
        route: Route,
        start: CampusNode,
        destination: CampusNode,
    ) -> EngineResult<()> {
        if route.start != start.id {
            return Err(EngineError::StartMismatch {
                route_start: route.start,
                node: start.id,
            });
        }
        if route.end != destination.id {
            return Err(EngineError::DestinationMismatch {
                route_end: route.end,
                node: destination.id,
            });
        }

        self.progress = RouteProgress::new(route.steps.len());
        self.navigating = true;
        self.last_location = None;
        self.last_speed_m_s = 0.0;
        self.wrong_direction = false;
        self.announced_events.clear();

        if let Some(first) = route.steps.first() {
            self.sink
                .on_step_instruction(&first.instruction, first.step_number, route.steps.len());
        }

        self.route = Some(route);
        self.start_node = Some(start);
        self.destination = Some(destination);
        Ok(())
    }

    /// Reset to idle.  Safe to call when already idle.
    pub fn stop_navigation(&mut self) {
        self.route = None;
        self.start_node = None;
        self.destination = None;
        self.progress = RouteProgress::new(0);
        self.navigating = false;
        self.last_location = None;
        self.last_speed_m_s = 0.0;
        self.wrong_direction = false;
        self.announced_events.clear();
    }

    // ── Per-sample entry point ────────────────────────────────────────────

    /// Feed one location sample.  No-op while idle.
    ///
    /// `map` supplies the event-node table for the proximity scan; it must
    /// be the map the route was planned against.
    pub fn update_location(&mut self, location: &UserLocation, map: &CampusMap) {
        if !self.navigating || self.route.is_none() {
            return;
        }

        let mut distance_moved_m = 0.0;
        if let Some(last) = self.last_location {
            if location.timestamp_ms < last.timestamp_ms {
                log::warn!(
                    "dropping out-of-order location sample ({} < {})",
                    location.timestamp_ms,
                    last.timestamp_ms
                );
                return;
            }
            distance_moved_m = last.position.distance_m(location.position);
            let dt_s = (location.timestamp_ms - last.timestamp_ms) as f64 / 1000.0;
            if dt_s > 0.0 {
                self.last_speed_m_s = distance_moved_m / dt_s;
            }
        }
        self.last_location = Some(*location);

        self.check_direction(location);

        // Metres walked the wrong way must not count toward the step.
        if !self.wrong_direction {
            self.progress.distance_traveled_m += distance_moved_m;
        }

        self.check_nearby_events(location, map);

        if !self.wrong_direction {
            self.check_step_completion();
        }
    }

    /// Manually advance to the next step, bypassing the distance threshold
    /// (UI "Next Step" control).  No-op on the final step — arrival stays
    /// owned by the automatic completion path.
    pub fn next_step(&mut self) {
        let Some(route) = &self.route else { return };
        if self.progress.step_index + 1 < route.steps.len() {
            self.complete_current_step();
        }
    }

    // ── Derived queries ───────────────────────────────────────────────────

    pub fn is_navigating(&self) -> bool {
        self.navigating
    }

    /// `true` while the walker is flagged as heading the wrong way.
    pub fn is_wrong_direction(&self) -> bool {
        self.wrong_direction
    }

    /// The step currently being walked, or `None` while idle.
    pub fn current_step(&self) -> Option<&NavigationStep> {
        self.route
            .as_ref()
            .and_then(|r| r.steps.get(self.progress.step_index))
    }

    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    pub fn destination(&self) -> Option<&CampusNode> {
        self.destination.as_ref()
    }

    pub fn progress(&self) -> &RouteProgress {
        &self.progress
    }

    /// Metres left to walk: the sum of all steps from the current one
    /// onward, minus what is already accrued in the current step.  Floored
    /// at zero; zero while idle.
    pub fn remaining_distance_m(&self) -> f64 {
        let Some(route) = &self.route else { return 0.0 };
        let remaining: f64 = route
            .steps
            .iter()
            .skip(self.progress.step_index)
            .map(|s| s.distance_m)
            .sum();
        (remaining - self.progress.distance_traveled_m).max(0.0)
    }

    /// Percent of the route's total distance covered, clamped to `[0, 100]`.
    /// Zero for an absent or zero-distance route.
    pub fn progress_percent(&self) -> f64 {
        let Some(route) = &self.route else { return 0.0 };
        if route.distance_m <= 0.0 {
            return 0.0;
        }
        let traveled = route.distance_m - self.remaining_distance_m();
        (traveled / route.distance_m * 100.0).clamp(0.0, 100.0)
    }

    /// A serializable view of the live state for presentation layers.
    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            route_id: self.route.as_ref().map(|r| r.id.clone()),
            navigating: self.navigating,
            step_index: self.progress.step_index,
            total_steps: self.route.as_ref().map_or(0, |r| r.steps.len()),
            distance_traveled_m: self.progress.distance_traveled_m,
            remaining_distance_m: self.remaining_distance_m(),
            progress_percent: self.progress_percent(),
            wrong_direction: self.wrong_direction,
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    /// Edge-triggered wrong-direction detection.
    ///
    /// Skipped when the sample has no heading or the walker is effectively
    /// stationary.  Announcements fire only on the transition into the wrong
    /// state and on the transition back — never repeatedly within a state.
    fn check_direction(&mut self, location: &UserLocation) {
        let Some(direction) = self.current_step().map(|s| s.direction) else {
            return;
        };
        let Some(heading) = location.heading_deg else {
            return;
        };
        if self.last_speed_m_s < MIN_SPEED_FOR_DIRECTION_CHECK_M_S {
            return;
        }

        let correct = is_correct_direction(heading, direction.degrees(), DIRECTION_TOLERANCE_DEG);

        if !correct && !self.wrong_direction {
            self.wrong_direction = true;
            self.sink.on_wrong_direction(direction);
        } else if correct && self.wrong_direction {
            self.wrong_direction = false;
            self.sink.on_direction_corrected();
        }
    }

    /// Announce event nodes within range, at most once each per session.
    fn check_nearby_events(&mut self, location: &UserLocation, map: &CampusMap) {
        for node in map.event_nodes() {
            if self.announced_events.contains(&node.id) {
                continue;
            }
            let Some(info) = node.event_info.as_deref() else {
                continue;
            };
            if location.position.distance_m(node.position) <= NEARBY_EVENT_THRESHOLD_M {
                self.sink.on_nearby_event(&node.name, info);
                self.announced_events.insert(node.id.clone());
            }
        }
    }

    fn check_step_completion(&mut self) {
        let Some(step) = self.current_step() else { return };
        if self.progress.completed.get(self.progress.step_index) == Some(&true) {
            return;
        }
        if self.progress.distance_traveled_m >= step.distance_m - STEP_COMPLETION_THRESHOLD_M {
            self.complete_current_step();
        }
    }

    /// Mark the current step done and either advance (announcing the next
    /// instruction) or, on the final step, announce arrival and go idle.
    fn complete_current_step(&mut self) {
        let Some(route) = &self.route else { return };
        let total = route.steps.len();

        if self.progress.complete_current() {
            let next = &route.steps[self.progress.step_index];
            let (instruction, number) = (next.instruction.clone(), next.step_number);
            self.sink.on_step_instruction(&instruction, number, total);
        } else {
            if let Some(dest) = self.destination.take() {
                self.sink.on_arrival(&dest.name);
            }
            self.stop_navigation();
        }
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

/// Point-in-time view of the engine for presentation layers (progress bars,
/// step cards).  Pure data; queries on the engine stay authoritative.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NavigationSnapshot {
    pub route_id: Option<String>,
    pub navigating: bool,
    pub step_index: usize,
    pub total_steps: usize,
    pub distance_traveled_m: f64,
    pub remaining_distance_m: f64,
    pub progress_percent: f64,
    pub wrong_direction: bool,
}
