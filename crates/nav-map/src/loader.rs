//! JSON map loader.
//!
//! # Document format
//!
//! ```json
//! {
//!   "nodes": {
//!     "library": {
//!       "id": "library",
//!       "name": "Main Library",
//!       "qr_code": "CAMPUS_LIBRARY",
//!       "position": { "lat": 51.3397, "lon": 12.3731 },
//!       "kind": "building",
//!       "description": "Open 8-22",
//!       "event_info": "Book sale today"
//!     }
//!   },
//!   "edges": [
//!     {
//!       "from": "library", "to": "canteen",
//!       "distance_m": 120.0, "direction": "east",
//!       "accessible": true,
//!       "instructions": "Follow the main path east past the fountain"
//!     }
//!   ]
//! }
//! ```
//!
//! `description` and `event_info` are optional.  The loader parses with
//! serde and then runs the document through [`CampusMap::new`], so a
//! successfully loaded map always satisfies the model invariants.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::model::{CampusEdge, CampusMap, CampusNode};
use crate::MapResult;

// ── JSON document ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MapDocument {
    nodes: HashMap<String, CampusNode>,
    edges: Vec<CampusEdge>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a campus map from a JSON file.
pub fn from_json_file(path: &Path) -> MapResult<CampusMap> {
    let file = std::fs::File::open(path)?;
    from_json_reader(file)
}

/// Like [`from_json_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from a bundled
/// asset stream.
pub fn from_json_reader<R: Read>(reader: R) -> MapResult<CampusMap> {
    let doc: MapDocument = serde_json::from_reader(reader)?;
    CampusMap::new(doc.nodes, doc.edges)
}
