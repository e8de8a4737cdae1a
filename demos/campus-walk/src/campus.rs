//! The demo's synthetic campus.
//!
//! Six waypoints on a flat metre grid placed at the equator, where one
//! degree of latitude and one of longitude are both ~111 195 m — so the
//! authored edge distances agree with the haversine geometry the simulated
//! walk produces.
//!
//! ```text
//!   auditorium          science_block
//!        |                    |
//!     canteen --- quad --- library
//!                   \  (stairs)
//!                    \
//!                 main_gate
//! ```
//!
//! The quad→science_block shortcut is a staircase, so accessible routing
//! detours through the library ramp.

use std::collections::HashMap;

use nav_core::{Direction, GeoPoint};
use nav_map::{CampusEdge, CampusMap, CampusNode, MapResult, NodeKind};

/// Metres per degree at the equator (both axes).
pub const M_PER_DEG: f64 = 111_194.9266;

/// A position `east_m`/`north_m` metres from the gate.
pub fn grid(east_m: f64, north_m: f64) -> GeoPoint {
    GeoPoint::new(north_m / M_PER_DEG, east_m / M_PER_DEG)
}

fn node(
    id: &str,
    name: &str,
    kind: NodeKind,
    east_m: f64,
    north_m: f64,
    event_info: Option<&str>,
) -> CampusNode {
    CampusNode {
        id: id.to_owned(),
        name: name.to_owned(),
        qr_code: format!("CAMPUS_{}", id.to_uppercase()),
        position: grid(east_m, north_m),
        kind,
        description: None,
        event_info: event_info.map(str::to_owned),
    }
}

fn opposite(direction: Direction) -> Direction {
    match direction {
        Direction::North => Direction::South,
        Direction::Northeast => Direction::Southwest,
        Direction::East => Direction::West,
        Direction::Southeast => Direction::Northwest,
        Direction::South => Direction::North,
        Direction::Southwest => Direction::Northeast,
        Direction::West => Direction::East,
        Direction::Northwest => Direction::Southeast,
    }
}

/// One walkway authored as a pair of directed edges.
fn walkway(
    from: &str,
    to: &str,
    distance_m: f64,
    direction: Direction,
    accessible: bool,
    there: &str,
    back: &str,
) -> [CampusEdge; 2] {
    [
        CampusEdge {
            from: from.to_owned(),
            to: to.to_owned(),
            distance_m,
            direction,
            accessible,
            instructions: there.to_owned(),
        },
        CampusEdge {
            from: to.to_owned(),
            to: from.to_owned(),
            distance_m,
            direction: opposite(direction),
            accessible,
            instructions: back.to_owned(),
        },
    ]
}

pub fn build_campus() -> MapResult<CampusMap> {
    let nodes: HashMap<String, CampusNode> = [
        node("main_gate", "Main Gate", NodeKind::Entrance, 0.0, 0.0, None),
        node("quad", "Central Quad", NodeKind::Landmark, 0.0, 80.0, None),
        node(
            "library",
            "Main Library",
            NodeKind::Building,
            60.0,
            80.0,
            Some("Book fair in the atrium today"),
        ),
        node("canteen", "Canteen", NodeKind::Facility, -50.0, 80.0, None),
        node(
            "science_block",
            "Science Block",
            NodeKind::Building,
            60.0,
            150.0,
            None,
        ),
        node("auditorium", "Auditorium", NodeKind::Building, -50.0, 150.0, None),
    ]
    .into_iter()
    .map(|n| (n.id.clone(), n))
    .collect();

    let edges: Vec<CampusEdge> = [
        walkway(
            "main_gate",
            "quad",
            80.0,
            Direction::North,
            true,
            "Follow the main avenue north to the Central Quad",
            "Walk south down the main avenue to the Main Gate",
        ),
        walkway(
            "quad",
            "library",
            60.0,
            Direction::East,
            true,
            "Head east across the quad to the Main Library",
            "Leave the library and walk west to the Central Quad",
        ),
        walkway(
            "quad",
            "canteen",
            50.0,
            Direction::West,
            true,
            "Head west past the noticeboards to the Canteen",
            "Walk east from the canteen back to the Central Quad",
        ),
        // Staircase shortcut: shorter, but no ramp.
        walkway(
            "quad",
            "science_block",
            92.0,
            Direction::Northeast,
            false,
            "Take the stairs northeast up to the Science Block",
            "Take the stairs southwest down to the Central Quad",
        ),
        walkway(
            "library",
            "science_block",
            70.0,
            Direction::North,
            true,
            "Follow the ramp north along the library to the Science Block",
            "Follow the ramp south along the library to the Main Library",
        ),
        walkway(
            "canteen",
            "auditorium",
            70.0,
            Direction::North,
            true,
            "Walk north along the canteen terrace to the Auditorium",
            "Walk south from the auditorium to the Canteen",
        ),
    ]
    .into_iter()
    .flatten()
    .collect();

    CampusMap::new(nodes, edges)
}
