//! Dijkstra route planner and destination enumeration.
//!
//! # Cost units
//!
//! Edge weights are authored walking distances in metres (f64).  Internally
//! Dijkstra runs on integer **millimetre** costs so heap ordering is total
//! and exact; the reported `Route.distance_m` is the f64 sum of the actual
//! edges, so it always equals what the map author wrote.
//!
//! # Scale
//!
//! Campus maps are tens to low hundreds of nodes.  The adjacency list is
//! rebuilt per query (the accessibility filter changes the edge set) and
//! [`available_destinations`] runs one full query per candidate node — both
//! are fine at this scale and would need caching before use on graphs in
//! the thousands of nodes.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use nav_map::{CampusMap, CampusNode};

use crate::route::{NavigationStep, Route};
use crate::{RouteError, RouteResult};

/// A reachable destination with its shortest walking distance.
#[derive(Clone, Debug)]
pub struct Destination<'m> {
    pub node: &'m CampusNode,
    pub distance_m: f64,
}

/// Compute the shortest walking route from `start_id` to `end_id`.
///
/// With `require_accessible`, only wheelchair-accessible edges are
/// considered.  `start_id == end_id` yields a trivial zero-step route.
///
/// # Errors
///
/// [`RouteError::UnknownNode`] if either id is absent from the map;
/// [`RouteError::NoRoute`] if no edge sequence connects the two under the
/// current filter.
pub fn find_route(
    map: &CampusMap,
    start_id: &str,
    end_id: &str,
    require_accessible: bool,
) -> RouteResult<Route> {
    for id in [start_id, end_id] {
        if !map.contains(id) {
            return Err(RouteError::UnknownNode(id.to_owned()));
        }
    }

    if start_id == end_id {
        return Ok(Route {
            id: format!("{start_id}_to_{end_id}"),
            start: start_id.to_owned(),
            end: end_id.to_owned(),
            distance_m: 0.0,
            steps: vec![],
            accessible: require_accessible,
            estimated_time_min: 0,
        });
    }

    // Dense node indexing for the Dijkstra arrays.
    let ids: Vec<&str> = map.nodes().map(|n| n.id.as_str()).collect();
    let index: HashMap<&str, usize> = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();

    // Adjacency under the current edge filter: node index → edge indices.
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); ids.len()];
    for (e, edge) in map.edges().iter().enumerate() {
        if require_accessible && !edge.accessible {
            continue;
        }
        adjacency[index[edge.from.as_str()]].push(e);
    }

    let start = index[start_id];
    let end = index[end_id];

    // dist[v] = best known cost (mm) to reach v.
    let mut dist = vec![u64::MAX; ids.len()];
    // prev_edge[v] = index of the edge that reached v along the best path.
    let mut prev_edge: Vec<Option<usize>> = vec![None; ids.len()];

    dist[start] = 0;

    // Min-heap: (cost, node index). Reverse makes BinaryHeap behave as min-heap.
    let mut heap: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();
    heap.push(Reverse((0, start)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if node == end {
            return Ok(materialize(map, &index, &prev_edge, start_id, end_id, require_accessible));
        }

        // Skip stale heap entries.
        if cost > dist[node] {
            continue;
        }

        for &e in &adjacency[node] {
            let edge = &map.edges()[e];
            let neighbor = index[edge.to.as_str()];
            let new_cost = cost.saturating_add(cost_mm(edge.distance_m));

            if new_cost < dist[neighbor] {
                dist[neighbor] = new_cost;
                prev_edge[neighbor] = Some(e);
                heap.push(Reverse((new_cost, neighbor)));
            }
        }
    }

    Err(RouteError::NoRoute {
        from: start_id.to_owned(),
        to: end_id.to_owned(),
        accessible_only: require_accessible,
    })
}

/// Every node reachable from `start_id`, sorted ascending by walking
/// distance.  The start itself and unreachable nodes are omitted.
///
/// Runs one planner query per candidate — O(N) Dijkstra invocations.
pub fn available_destinations<'m>(
    map: &'m CampusMap,
    start_id: &str,
    require_accessible: bool,
) -> RouteResult<Vec<Destination<'m>>> {
    if !map.contains(start_id) {
        return Err(RouteError::UnknownNode(start_id.to_owned()));
    }

    let mut destinations: Vec<Destination<'m>> = Vec::new();
    for node in map.nodes() {
        if node.id == start_id {
            continue;
        }
        match find_route(map, start_id, &node.id, require_accessible) {
            Ok(route) => destinations.push(Destination { node, distance_m: route.distance_m }),
            Err(RouteError::NoRoute { .. }) => {}
            Err(other) => return Err(other),
        }
    }

    destinations.sort_by(|a, b| {
        a.distance_m
            .total_cmp(&b.distance_m)
            .then_with(|| a.node.id.cmp(&b.node.id))
    });
    Ok(destinations)
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

#[inline]
fn cost_mm(distance_m: f64) -> u64 {
    (distance_m * 1000.0).round() as u64
}

/// Walk the `prev_edge` chain from `end_id` back to `start_id` and build the
/// start-to-end step sequence.
fn materialize(
    map: &CampusMap,
    index: &HashMap<&str, usize>,
    prev_edge: &[Option<usize>],
    start_id: &str,
    end_id: &str,
    require_accessible: bool,
) -> Route {
    let mut edge_indices = Vec::new();
    let mut cur = index[end_id];
    while let Some(e) = prev_edge[cur] {
        edge_indices.push(e);
        cur = index[map.edges()[e].from.as_str()];
    }
    edge_indices.reverse();

    let mut distance_m = 0.0;
    let steps: Vec<NavigationStep> = edge_indices
        .iter()
        .enumerate()
        .map(|(i, &e)| {
            let edge = &map.edges()[e];
            distance_m += edge.distance_m;
            NavigationStep {
                step_number: i as u32 + 1,
                instruction: edge.instructions.clone(),
                distance_m: edge.distance_m,
                direction: edge.direction,
                from_node: edge.from.clone(),
                to_node: edge.to.clone(),
            }
        })
        .collect();

    Route {
        id: format!("{start_id}_to_{end_id}"),
        start: start_id.to_owned(),
        end: end_id.to_owned(),
        distance_m,
        steps,
        accessible: require_accessible,
        estimated_time_min: Route::estimate_minutes(distance_m),
    }
}
