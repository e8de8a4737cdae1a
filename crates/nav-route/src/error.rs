//! Planner error type.

use thiserror::Error;

/// Errors produced by `nav-route`.
///
/// "Unknown node" and "no path" are deliberately distinct variants: the
/// first is invalid input, the second a property of the graph under the
/// current edge filter.  Both are expected outcomes for callers, not
/// exceptional conditions.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("node {0:?} not found in campus map")]
    UnknownNode(String),

    #[error("no walkable path from {from:?} to {to:?} (accessible only: {accessible_only})")]
    NoRoute {
        from: String,
        to: String,
        accessible_only: bool,
    },
}

pub type RouteResult<T> = Result<T, RouteError>;
