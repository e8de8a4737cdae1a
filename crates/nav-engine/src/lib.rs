//! `nav-engine` — the stateful navigation tracker.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`engine`]   | `NavigationEngine<G>` — the per-sample tracking state machine |
//! | [`progress`] | `RouteProgress` — engine-owned per-step completion record     |
//! | [`guidance`] | `GuidanceSink` trait, `NoopGuidance`, `VoiceSettings`         |
//! | [`location`] | `UserLocation` — one timestamped sensor sample                |
//! | [`error`]    | `EngineError`, `EngineResult<T>`                              |
//!
//! # Execution model
//!
//! The engine is single-threaded and event-driven: one producer delivers
//! location samples serially and every engine method is synchronous, O(route
//! length) at worst.  Callers on multi-threaded runtimes must serialize
//! `update_location` / `next_step` / `start_navigation` / `stop_navigation`
//! behind one mutex or event loop.  Guidance announcements are fire-and-forget
//! calls into the [`GuidanceSink`]; the engine never waits on the sink.
//!
//! One engine instance tracks one navigation session at a time.  There is no
//! process-wide singleton — the caller owns the instance and its lifetime.

pub mod engine;
pub mod error;
pub mod guidance;
pub mod location;
pub mod progress;


pub use engine::{
    MIN_SPEED_FOR_DIRECTION_CHECK_M_S, NEARBY_EVENT_THRESHOLD_M, NavigationEngine,
    NavigationSnapshot, STEP_COMPLETION_THRESHOLD_M,
};
pub use error::{EngineError, EngineResult};
pub use guidance::{GuidanceSink, NoopGuidance, VoiceSettings};
pub use location::UserLocation;
pub use progress::RouteProgress;
