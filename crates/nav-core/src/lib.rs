//! `nav-core` — foundational types for the `campus-nav` workspace.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                            |
//! |---------------|-----------------------------------------------------|
//! | [`geo`]       | `GeoPoint`, haversine distance                      |
//! | [`heading`]   | angle normalization, angular difference, tolerance  |
//! | [`direction`] | `Direction` — the 8 compass octants                 |

pub mod direction;
pub mod geo;
pub mod heading;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use geo::GeoPoint;
pub use heading::{
    DIRECTION_TOLERANCE_DEG, angle_diff_deg, is_correct_direction, normalize_deg,
    signed_angle_diff_deg,
};
