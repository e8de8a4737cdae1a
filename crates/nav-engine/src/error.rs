//! Engine error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("route starts at {route_start:?} but start node is {node:?}")]
    StartMismatch { route_start: String, node: String },

    #[error("route ends at {route_end:?} but destination node is {node:?}")]
    DestinationMismatch { route_end: String, node: String },
}

pub type EngineResult<T> = Result<T, EngineError>;
