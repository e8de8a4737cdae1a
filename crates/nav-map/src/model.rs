//! Campus map representation: waypoint nodes, walkable edges, spatial index.
//!
//! # Data layout
//!
//! Nodes are keyed by their authored string id in a `HashMap`; edges are an
//! ordered `Vec` of directed arcs.  Campus maps are tens to low hundreds of
//! nodes, so there is no need for CSR packing — adjacency is built on demand
//! by the planner.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lat, lon)` to the nearest node id.  Used to
//! snap a raw GPS fix to the closest waypoint (e.g. picking a start node when
//! the user has not scanned a QR anchor).
//!
//! # Invariants (enforced by [`CampusMap::new`])
//!
//! - every edge's `from` and `to` resolve to nodes in the same map;
//! - every edge distance is strictly positive;
//! - QR codes are unique across nodes.

use std::collections::HashMap;

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use nav_core::{Direction, GeoPoint};

use crate::{MapError, MapResult};

// ── Node & edge types ─────────────────────────────────────────────────────────

/// Category tag for a campus location.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Entrance,
    Building,
    Facility,
    Landmark,
}

/// A QR-anchored campus waypoint.  Immutable after map load.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CampusNode {
    /// Unique string id, the map's primary key.
    pub id: String,
    /// Display name ("Main Library").
    pub name: String,
    /// Unique code printed on the physical QR anchor.
    pub qr_code: String,
    /// WGS-84 position.
    pub position: GeoPoint,
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Present iff an event is currently running at this location.  The
    /// engine announces it once when the walker passes within range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_info: Option<String>,
}

/// A directed walkable segment.  Bidirectional travel requires the map
/// author to supply both directions explicitly.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CampusEdge {
    pub from: String,
    pub to: String,
    /// Authored walking distance in metres.  Strictly positive.
    pub distance_m: f64,
    /// Heading a walker holds while traversing this edge.
    pub direction: Direction,
    /// Wheelchair-accessible segment.
    pub accessible: bool,
    /// Human instruction text ("Turn left past the library").
    pub instructions: String,
}

// ── R-tree node entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lon]` point with
/// the associated node id.
#[derive(Clone)]
struct NodeEntry {
    point: [f64; 2], // [lat, lon]
    id: String,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    /// Squared Euclidean distance in lat/lon space.  Sufficient for
    /// nearest-node queries at campus extents (hundreds of metres).
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

// ── CampusMap ─────────────────────────────────────────────────────────────────

/// A validated, read-only campus map.
///
/// Construct via [`CampusMap::new`] (or the [`loader`][crate::loader]); both
/// run full validation, so any `CampusMap` in hand satisfies the invariants
/// above.
pub struct CampusMap {
    nodes: HashMap<String, CampusNode>,
    edges: Vec<CampusEdge>,
    spatial_idx: RTree<NodeEntry>,
}

impl CampusMap {
    /// Validate `nodes` and `edges` and build the spatial index.
    pub fn new(nodes: HashMap<String, CampusNode>, edges: Vec<CampusEdge>) -> MapResult<Self> {
        for edge in &edges {
            for endpoint in [&edge.from, &edge.to] {
                if !nodes.contains_key(endpoint) {
                    return Err(MapError::DanglingEdge {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
            if edge.distance_m <= 0.0 {
                return Err(MapError::BadEdgeDistance {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    distance_m: edge.distance_m,
                });
            }
        }

        let mut seen_qr: HashMap<&str, &str> = HashMap::with_capacity(nodes.len());
        for node in nodes.values() {
            if let Some(&first) = seen_qr.get(node.qr_code.as_str()) {
                // HashMap iteration order is arbitrary; normalize so the
                // error (and tests) are deterministic.
                let (a, b) = if first < node.id.as_str() {
                    (first, node.id.as_str())
                } else {
                    (node.id.as_str(), first)
                };
                return Err(MapError::DuplicateQrCode {
                    first: a.to_owned(),
                    second: b.to_owned(),
                    qr_code: node.qr_code.clone(),
                });
            }
            seen_qr.insert(&node.qr_code, &node.id);
        }

        // Bulk-load the R-tree (faster than N inserts).
        let entries: Vec<NodeEntry> = nodes
            .values()
            .map(|n| NodeEntry {
                point: [n.position.lat, n.position.lon],
                id: n.id.clone(),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        log::debug!(
            "campus map validated: {} nodes, {} edges",
            nodes.len(),
            edges.len()
        );

        Ok(Self { nodes, edges, spatial_idx })
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&CampusNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterator over all nodes (arbitrary order).
    pub fn nodes(&self) -> impl Iterator<Item = &CampusNode> {
        self.nodes.values()
    }

    /// All edges, in authored order.
    pub fn edges(&self) -> &[CampusEdge] {
        &self.edges
    }

    /// Nodes with a live event annotation.
    pub fn event_nodes(&self) -> impl Iterator<Item = &CampusNode> {
        self.nodes.values().filter(|n| n.event_info.is_some())
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The node nearest to `pos`, or `None` for an empty map.
    pub fn nearest_node(&self, pos: GeoPoint) -> Option<&CampusNode> {
        self.spatial_idx
            .nearest_neighbor(&[pos.lat, pos.lon])
            .and_then(|e| self.nodes.get(&e.id))
    }
}

impl std::fmt::Debug for CampusMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampusMap")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .finish()
    }
}
