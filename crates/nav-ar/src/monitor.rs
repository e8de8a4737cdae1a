//! Sustained-deviation monitoring for the AR overlay.
//!
//! The engine's own wrong-direction check reacts per GPS sample; the AR
//! overlay wants a slower, perceptual hint — only flag the walker after
//! they have *held* a bad heading for a few seconds, and clear the hint the
//! moment they swing back.  Both transitions are edge-triggered so the
//! overlay animates once per excursion.

use nav_core::angle_diff_deg;

/// Angular deviation from the expected heading that counts as off course.
pub const DEVIATION_THRESHOLD_DEG: f64 = 45.0;

/// How long the deviation must be held before the hint raises.
pub const DEVIATION_MIN_DURATION_MS: u64 = 3_000;

/// A state transition reported by [`DeviationMonitor::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviationEvent {
    /// The walker has been off the expected heading for the full window.
    OffHeading,
    /// The walker swung back within tolerance after an off-heading hint.
    BackOnHeading,
}

/// Tracks one expected heading against a stream of timestamped samples.
#[derive(Clone, Debug, Default)]
pub struct DeviationMonitor {
    /// Timestamp of the first out-of-tolerance sample of the current run.
    off_since_ms: Option<u64>,
    hinting: bool,
}

impl DeviationMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one heading sample against `expected_deg` at `t_ms`.  Returns a
    /// transition when one occurs, `None` otherwise.
    pub fn update(&mut self, heading_deg: f64, expected_deg: f64, t_ms: u64) -> Option<DeviationEvent> {
        if angle_diff_deg(heading_deg, expected_deg) <= DEVIATION_THRESHOLD_DEG {
            self.off_since_ms = None;
            if self.hinting {
                self.hinting = false;
                return Some(DeviationEvent::BackOnHeading);
            }
            return None;
        }

        let since = *self.off_since_ms.get_or_insert(t_ms);
        if !self.hinting && t_ms.saturating_sub(since) >= DEVIATION_MIN_DURATION_MS {
            self.hinting = true;
            return Some(DeviationEvent::OffHeading);
        }
        None
    }

    /// `true` while the off-heading hint is showing.
    pub fn is_off_heading(&self) -> bool {
        self.hinting
    }

    /// Clear all state, e.g. when the expected heading changes on a step
    /// advance.
    pub fn reset(&mut self) {
        self.off_since_ms = None;
        self.hinting = false;
    }
}
