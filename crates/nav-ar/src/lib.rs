//! `nav-ar` — sensor-side helpers for the AR guidance overlay.
//!
//! These are small, allocation-free state machines fed raw device-sensor
//! samples.  They shape what the overlay *shows*; none of them feed back
//! into the navigation engine's own tracking:
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`steps`]   | `StepDetector` — sustained-motion prompt for manual advance  |
//! | [`heading`] | `HeadingSmoother` — jitter-free display heading for the arrow|
//! | [`monitor`] | `DeviationMonitor` — sustained off-heading hint              |
//!
//! The detector deliberately never advances a route by itself: it raises a
//! prompt, and the walker's confirmation is what calls the engine's manual
//! advance.  Only `nav-core` is depended on — this crate knows angles and
//! accelerations, not maps or routes.

pub mod heading;
pub mod monitor;
pub mod steps;


pub use heading::{HEADING_DEADZONE_DEG, HeadingSmoother};
pub use monitor::{
    DEVIATION_MIN_DURATION_MS, DEVIATION_THRESHOLD_DEG, DeviationEvent, DeviationMonitor,
};
pub use steps::{STEP_ACCEL_THRESHOLD_G, STEP_MIN_DURATION_MS, StepDetector};
