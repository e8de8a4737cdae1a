//! Display-heading smoothing for the AR arrow.
//!
//! Raw compass headings jitter by a degree or two every sample; painting
//! them straight onto the overlay makes the arrow shiver.  The smoother
//! blends each new reading into the displayed heading with a responsiveness
//! that grows with the size of the jump, so jitter is damped hard while a
//! real turn tracks almost immediately.  All blending is wraparound-correct
//! (359° → 1° is a 2° rotation, not a 358° spin).
//!
//! Display-only: the navigation engine's direction check consumes raw
//! headings, never these.

use nav_core::{normalize_deg, signed_angle_diff_deg};

/// Angular changes smaller than this are ignored outright.
pub const HEADING_DEADZONE_DEG: f64 = 1.5;

// Blend-factor bounds: jitter just past the deadzone moves the display a
// little; a 90°-or-larger jump tracks at near-full speed.
const MIN_BLEND: f64 = 0.15;
const MAX_BLEND: f64 = 0.9;
const FULL_BLEND_AT_DEG: f64 = 90.0;

/// Adaptive exponential smoother over compass headings.
///
/// The first sample becomes both the displayed heading and the *anchor* —
/// the direction the phone faced when AR guidance started.  The overlay
/// rotates its arrow by [`relative_deg`](Self::relative_deg), the smoothed
/// rotation away from that anchor.
#[derive(Clone, Debug, Default)]
pub struct HeadingSmoother {
    anchor_deg: Option<f64>,
    smoothed_deg: Option<f64>,
}

impl HeadingSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blend in one raw compass reading and return the smoothed heading in
    /// `[0, 360)`.
    pub fn update(&mut self, raw_deg: f64) -> f64 {
        let raw = normalize_deg(raw_deg);
        let Some(current) = self.smoothed_deg else {
            self.anchor_deg = Some(raw);
            self.smoothed_deg = Some(raw);
            return raw;
        };

        let delta = signed_angle_diff_deg(current, raw);
        if delta.abs() < HEADING_DEADZONE_DEG {
            return current;
        }

        let blend = (delta.abs() / FULL_BLEND_AT_DEG).clamp(MIN_BLEND, MAX_BLEND);
        let next = normalize_deg(current + blend * delta);
        self.smoothed_deg = Some(next);
        next
    }

    /// The current smoothed heading, or `None` before the first sample.
    pub fn heading_deg(&self) -> Option<f64> {
        self.smoothed_deg
    }

    /// Smoothed rotation away from the anchor heading, in `(-180, 180]`
    /// (positive = clockwise).  `None` before the first sample.
    pub fn relative_deg(&self) -> Option<f64> {
        match (self.anchor_deg, self.smoothed_deg) {
            (Some(anchor), Some(current)) => Some(signed_angle_diff_deg(anchor, current)),
            _ => None,
        }
    }

    /// Drop both the smoothed state and the anchor; the next sample starts a
    /// fresh session.
    pub fn reset(&mut self) {
        self.anchor_deg = None;
        self.smoothed_deg = None;
    }
}
