//! `nav-map` — campus map model, loading, and physical-world binding.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`model`]  | `CampusMap` (validated graph + R-tree), node/edge types    |
//! | [`loader`] | JSON map loading (`from_json_file` / `from_json_reader`)   |
//! | [`qr`]     | Scanned-code → node resolution                             |
//! | [`error`]  | `MapError`, `MapResult<T>`                                 |
//!
//! The map is pure data: loaded once, validated once, read-only thereafter.
//! Routing lives in `nav-route`; live tracking lives in `nav-engine`.

pub mod error;
pub mod loader;
pub mod model;
pub mod qr;


pub use error::{MapError, MapResult};
pub use model::{CampusEdge, CampusMap, CampusNode, NodeKind};
pub use qr::{QR_CODE_PREFIX, resolve_qr};
