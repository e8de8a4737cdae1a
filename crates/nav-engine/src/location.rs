//! One timestamped location sample from the sensor source.

use nav_core::GeoPoint;

/// A single GPS/compass fix.
///
/// `heading_deg` and `accuracy_m` are optional: a device without a compass
/// fix simply omits the heading and the engine skips direction checking for
/// that sample.  Missing sensors are never an error.
///
/// `timestamp_ms` is a caller-supplied monotonic clock in milliseconds.  The
/// engine computes speed from real elapsed time between consecutive samples
/// and drops samples whose timestamp runs backwards.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UserLocation {
    pub position: GeoPoint,
    pub heading_deg: Option<f64>,
    pub accuracy_m: Option<f64>,
    pub timestamp_ms: u64,
}

impl UserLocation {
    /// A fix with no heading or accuracy information.
    pub fn new(position: GeoPoint, timestamp_ms: u64) -> Self {
        Self { position, heading_deg: None, accuracy_m: None, timestamp_ms }
    }

    pub fn with_heading(mut self, heading_deg: f64) -> Self {
        self.heading_deg = Some(heading_deg);
        self
    }
}
