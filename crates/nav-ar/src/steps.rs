//! Accelerometer-driven step prompting.
//!
//! A walker holding their phone up for AR guidance produces a sustained rise
//! in accelerometer magnitude while actually walking.  Once that rise has
//! lasted long enough, the overlay shows a "made it to the next waypoint?"
//! prompt.  Confirming the prompt is what advances the route — the detector
//! itself never does.

/// Accelerometer magnitude (in g, gravity removed) above which the walker
/// counts as moving.
pub const STEP_ACCEL_THRESHOLD_G: f64 = 0.18;

/// How long the magnitude must stay above threshold before prompting.
pub const STEP_MIN_DURATION_MS: u64 = 3_000;

/// Edge-triggered sustained-motion detector.
///
/// Feed it every accelerometer sample via [`update`](Self::update); it
/// returns `true` exactly once per sustained window.  Re-arming requires the
/// magnitude to drop below threshold first, so continuous walking produces
/// one prompt, not a stream of them.
#[derive(Clone, Debug, Default)]
pub struct StepDetector {
    /// Timestamp of the first above-threshold sample of the current run.
    above_since_ms: Option<u64>,
    fired: bool,
}

impl StepDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one sample: `magnitude_g` in g units, `t_ms` a monotonic
    /// millisecond timestamp.  Returns `true` when a sustained-motion window
    /// completes.
    pub fn update(&mut self, magnitude_g: f64, t_ms: u64) -> bool {
        if magnitude_g >= STEP_ACCEL_THRESHOLD_G {
            let since = *self.above_since_ms.get_or_insert(t_ms);
            if !self.fired && t_ms.saturating_sub(since) >= STEP_MIN_DURATION_MS {
                self.fired = true;
                return true;
            }
        } else {
            self.above_since_ms = None;
            self.fired = false;
        }
        false
    }

    /// `true` while a fresh sustained window can still fire.
    pub fn is_armed(&self) -> bool {
        !self.fired
    }

    /// Forget any in-progress window (e.g. when navigation restarts).
    pub fn reset(&mut self) {
        self.above_since_ms = None;
        self.fired = false;
    }
}
