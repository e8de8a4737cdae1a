//! `nav-route` — shortest-path planning over the campus map.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`route`]   | `Route`, `NavigationStep`, walking-speed constant         |
//! | [`planner`] | `find_route` (Dijkstra), `available_destinations`         |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                            |
//!
//! Routes are immutable once planned.  Live progress (current step,
//! distance accrued, completion flags) belongs to `nav-engine`, so the same
//! `Route` can be replayed or handed to several consumers.

pub mod error;
pub mod planner;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{RouteError, RouteResult};
pub use planner::{Destination, available_destinations, find_route};
pub use route::{AVERAGE_WALKING_SPEED_M_PER_MIN, NavigationStep, Route};
