//! Map-subsystem error type.

use thiserror::Error;

/// Errors produced by `nav-map` during load-time validation.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("edge {from:?} -> {to:?} references unknown node {missing:?}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("edge {from:?} -> {to:?} has non-positive distance {distance_m}")]
    BadEdgeDistance {
        from: String,
        to: String,
        distance_m: f64,
    },

    #[error("nodes {first:?} and {second:?} share QR code {qr_code:?}")]
    DuplicateQrCode {
        first: String,
        second: String,
        qr_code: String,
    },

    #[error("map parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MapResult<T> = Result<T, MapError>;
