//! Unit tests for nav-route.

#[cfg(test)]
mod helpers {
    use std::collections::HashMap;

    use nav_core::{Direction, GeoPoint};
    use nav_map::{CampusEdge, CampusMap, CampusNode, NodeKind};

    pub fn node(id: &str, lat: f64, lon: f64) -> CampusNode {
        CampusNode {
            id: id.to_owned(),
            name: id.to_owned(),
            qr_code: format!("CAMPUS_{}", id.to_uppercase()),
            position: GeoPoint::new(lat, lon),
            kind: NodeKind::Landmark,
            description: None,
            event_info: None,
        }
    }

    pub fn edge(from: &str, to: &str, distance_m: f64, accessible: bool) -> CampusEdge {
        CampusEdge {
            from: from.to_owned(),
            to: to.to_owned(),
            distance_m,
            direction: Direction::North,
            accessible,
            instructions: format!("{from} to {to}"),
        }
    }

    pub fn map(nodes: Vec<CampusNode>, edges: Vec<CampusEdge>) -> CampusMap {
        let nodes: HashMap<String, CampusNode> =
            nodes.into_iter().map(|n| (n.id.clone(), n)).collect();
        CampusMap::new(nodes, edges).unwrap()
    }

    /// Diamond graph with a short and a long way from `a` to `d`:
    ///
    /// ```text
    ///   a →30→ b →30→ d        (short, 60 m, but b→d has stairs)
    ///   a →50→ c →40→ d        (long, 90 m, fully accessible)
    /// ```
    pub fn diamond() -> CampusMap {
        map(
            vec![
                node("a", 0.0, 0.0),
                node("b", 0.0003, 0.0),
                node("c", 0.0, 0.0003),
                node("d", 0.0006, 0.0),
            ],
            vec![
                edge("a", "b", 30.0, true),
                edge("b", "d", 30.0, false), // stairs
                edge("a", "c", 50.0, true),
                edge("c", "d", 40.0, true),
            ],
        )
    }
}

// ── Shortest paths ────────────────────────────────────────────────────────────

#[cfg(test)]
mod shortest_path {
    use super::helpers::{diamond, edge, map, node};
    use crate::{RouteError, find_route};

    #[test]
    fn picks_shorter_of_two_paths() {
        let campus = diamond();
        let route = find_route(&campus, "a", "d", false).unwrap();
        assert_eq!(route.distance_m, 60.0);
        assert_eq!(route.steps.len(), 2);
        assert_eq!(route.steps[0].to_node, "b");
    }

    #[test]
    fn total_distance_is_sum_of_steps() {
        let campus = diamond();
        let route = find_route(&campus, "a", "d", false).unwrap();
        let sum: f64 = route.steps.iter().map(|s| s.distance_m).sum();
        assert_eq!(route.distance_m, sum);
    }

    #[test]
    fn steps_are_contiguous_and_numbered() {
        let campus = diamond();
        let route = find_route(&campus, "a", "d", true).unwrap();
        for (i, pair) in route.steps.windows(2).enumerate() {
            assert_eq!(pair[0].to_node, pair[1].from_node, "gap after step {}", i + 1);
        }
        for (i, step) in route.steps.iter().enumerate() {
            assert_eq!(step.step_number, i as u32 + 1);
        }
        assert_eq!(route.steps.first().unwrap().from_node, "a");
        assert_eq!(route.steps.last().unwrap().to_node, "d");
    }

    #[test]
    fn accessible_filter_takes_detour() {
        let campus = diamond();
        let route = find_route(&campus, "a", "d", true).unwrap();
        // The short path crosses the b→d stairs, so the planner detours.
        assert_eq!(route.distance_m, 90.0);
        assert!(route.accessible);
        assert_eq!(route.steps[0].to_node, "c");
    }

    #[test]
    fn accessibility_can_disconnect() {
        let campus = map(
            vec![node("a", 0.0, 0.0), node("b", 0.0003, 0.0)],
            vec![edge("a", "b", 30.0, false)],
        );
        assert!(find_route(&campus, "a", "b", false).is_ok());
        let err = find_route(&campus, "a", "b", true).unwrap_err();
        assert!(matches!(err, RouteError::NoRoute { accessible_only: true, .. }));
    }

    #[test]
    fn unknown_node_errors() {
        let campus = diamond();
        let err = find_route(&campus, "a", "ghost", false).unwrap_err();
        assert!(matches!(err, RouteError::UnknownNode(id) if id == "ghost"));
        let err = find_route(&campus, "ghost", "a", false).unwrap_err();
        assert!(matches!(err, RouteError::UnknownNode(id) if id == "ghost"));
    }

    #[test]
    fn disconnected_graph_no_route() {
        let campus = map(
            vec![node("a", 0.0, 0.0), node("b", 0.0003, 0.0)],
            vec![],
        );
        let err = find_route(&campus, "a", "b", false).unwrap_err();
        assert!(matches!(err, RouteError::NoRoute { accessible_only: false, .. }));
    }

    #[test]
    fn directed_edge_blocks_return() {
        let campus = map(
            vec![node("a", 0.0, 0.0), node("b", 0.0003, 0.0)],
            vec![edge("a", "b", 30.0, true)], // one-way
        );
        assert!(find_route(&campus, "a", "b", false).is_ok());
        assert!(find_route(&campus, "b", "a", false).is_err());
    }

    #[test]
    fn trivial_route_same_node() {
        let campus = diamond();
        let route = find_route(&campus, "a", "a", false).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.distance_m, 0.0);
        assert_eq!(route.estimated_time_min, 0);
    }

    #[test]
    fn route_metadata() {
        let campus = diamond();
        let route = find_route(&campus, "a", "d", false).unwrap();
        assert_eq!(route.id, "a_to_d");
        assert_eq!(route.start, "a");
        assert_eq!(route.end, "d");
        assert!(!route.accessible);
    }
}

// ── Time estimates ────────────────────────────────────────────────────────────

#[cfg(test)]
mod estimates {
    use super::helpers::{edge, map, node};
    use crate::find_route;

    #[test]
    fn thirty_metres_is_one_minute() {
        // ceil(30 / 80) = 1
        let campus = map(
            vec![node("a", 0.0, 0.0), node("b", 0.0003, 0.0)],
            vec![edge("a", "b", 30.0, true)],
        );
        let route = find_route(&campus, "a", "b", false).unwrap();
        assert_eq!(route.steps.len(), 1);
        assert_eq!(route.distance_m, 30.0);
        assert_eq!(route.estimated_time_min, 1);
    }

    #[test]
    fn estimate_rounds_up() {
        // 90 m at 80 m/min = 1.125 min → 2.
        let campus = map(
            vec![node("a", 0.0, 0.0), node("b", 0.0009, 0.0)],
            vec![edge("a", "b", 90.0, true)],
        );
        let route = find_route(&campus, "a", "b", false).unwrap();
        assert_eq!(route.estimated_time_min, 2);
    }
}

// ── Destination enumeration ───────────────────────────────────────────────────

#[cfg(test)]
mod destinations {
    use super::helpers::{diamond, edge, map, node};
    use crate::{RouteError, available_destinations};

    #[test]
    fn sorted_ascending_by_distance() {
        let campus = diamond();
        let dests = available_destinations(&campus, "a", false).unwrap();
        let ids: Vec<&str> = dests.iter().map(|d| d.node.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "d"]); // 30, 50, 60
        assert!(dests.windows(2).all(|w| w[0].distance_m <= w[1].distance_m));
    }

    #[test]
    fn unreachable_nodes_omitted() {
        let campus = map(
            vec![
                node("a", 0.0, 0.0),
                node("b", 0.0003, 0.0),
                node("island", 0.001, 0.001),
            ],
            vec![edge("a", "b", 30.0, true)],
        );
        let dests = available_destinations(&campus, "a", false).unwrap();
        assert_eq!(dests.len(), 1);
        assert_eq!(dests[0].node.id, "b");
    }

    #[test]
    fn accessibility_shrinks_the_list() {
        let campus = map(
            vec![node("a", 0.0, 0.0), node("b", 0.0003, 0.0)],
            vec![edge("a", "b", 30.0, false)],
        );
        assert_eq!(available_destinations(&campus, "a", false).unwrap().len(), 1);
        assert!(available_destinations(&campus, "a", true).unwrap().is_empty());
    }

    #[test]
    fn unknown_start_errors() {
        let campus = diamond();
        let err = available_destinations(&campus, "ghost", false).unwrap_err();
        assert!(matches!(err, RouteError::UnknownNode(_)));
    }
}
