//! Compass heading math: normalization, angular difference, tolerance check.
//!
//! All angles are compass degrees (0° = north, clockwise).  Every function
//! is wraparound-correct: 350° and 10° are 20° apart, not 340°.

/// Default angular tolerance for the "walking the right way" test.
pub const DIRECTION_TOLERANCE_DEG: f64 = 45.0;

/// Map any degree value (including negatives) into `[0, 360)`.
pub fn normalize_deg(angle: f64) -> f64 {
    let normalized = angle % 360.0;
    if normalized < 0.0 { normalized + 360.0 } else { normalized }
}

/// Smallest absolute separation between two headings, in `[0, 180]`.
pub fn angle_diff_deg(a: f64, b: f64) -> f64 {
    let diff = (normalize_deg(a) - normalize_deg(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Signed smallest rotation carrying `from` onto `to`, in `(-180, 180]`.
///
/// Positive = clockwise.  Used by display-heading smoothing, which needs the
/// rotation direction, not just its magnitude.
pub fn signed_angle_diff_deg(from: f64, to: f64) -> f64 {
    let diff = normalize_deg(to) - normalize_deg(from);
    if diff > 180.0 {
        diff - 360.0
    } else if diff <= -180.0 {
        diff + 360.0
    } else {
        diff
    }
}

/// `true` iff `heading` is within `tolerance_deg` of `expected_deg`.
#[inline]
pub fn is_correct_direction(heading: f64, expected_deg: f64, tolerance_deg: f64) -> bool {
    angle_diff_deg(heading, expected_deg) <= tolerance_deg
}
