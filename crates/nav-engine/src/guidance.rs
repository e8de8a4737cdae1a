//! Guidance event sink — the engine's one-way notification boundary.
//!
//! The engine calls out to a [`GuidanceSink`] when something worth telling
//! the walker happens.  Sinks are voice announcers, haptic drivers, screen
//! overlays, or test doubles; the engine neither knows nor cares whether an
//! announcement was actually rendered.  No acknowledgment, no backpressure.

use nav_core::Direction;

/// Callbacks invoked by [`NavigationEngine`][crate::NavigationEngine] as
/// navigation progresses.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — console announcer
///
/// ```rust,ignore
/// struct Console;
///
/// impl GuidanceSink for Console {
///     fn on_step_instruction(&mut self, instruction: &str, step: u32, total: usize) {
///         println!("[{step}/{total}] {instruction}");
///     }
/// }
/// ```
pub trait GuidanceSink {
    /// A step's instruction should be presented: fired for the first step at
    /// `start_navigation` and for each subsequent step on advance.
    fn on_step_instruction(&mut self, _instruction: &str, _step_number: u32, _total_steps: usize) {}

    /// The walker completed the final step.
    fn on_arrival(&mut self, _destination_name: &str) {}

    /// The walker passed within range of a node with a live event.  Fired at
    /// most once per node per navigation session.
    fn on_nearby_event(&mut self, _node_name: &str, _event_info: &str) {}

    /// The walker just started heading the wrong way; `expected` is the
    /// direction they should be holding.  Edge-triggered: fired once per
    /// excursion, not per sample.
    fn on_wrong_direction(&mut self, _expected: Direction) {}

    /// The walker corrected course after a wrong-direction excursion.
    fn on_direction_corrected(&mut self) {}
}

/// A [`GuidanceSink`] that does nothing.  Use for headless planning or
/// tests that don't inspect announcements.
pub struct NoopGuidance;

impl GuidanceSink for NoopGuidance {}

// ── Voice configuration ───────────────────────────────────────────────────────

/// Text-to-speech configuration, owned by voice sink implementations.
///
/// The engine never reads these; they travel alongside the sink so the
/// presentation layer has one place to persist and edit them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VoiceSettings {
    pub enabled: bool,
    pub pitch: f32,
    pub rate: f32,
    pub language: String,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            pitch: 1.0,
            rate: 0.9,
            language: "en-US".to_owned(),
        }
    }
}
