use super::geometry::distance;
use super::graph::NavGraph;
use log::debug;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Map pixels to feet for the reported path length.
pub const FEET_PER_PIXEL: f64 = 0.6;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Waypoint ids from start to goal, both included.
    pub waypoints: Vec<usize>,
    pub length_px: f64,
}

impl Route {
    pub fn length_ft(&self) -> f64 {
        self.length_px * FEET_PER_PIXEL
    }
}

#[derive(Clone, Copy, Debug)]
struct Frontier {
    estimate: f64,
    id: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    // Reversed so the max-heap pops the smallest estimate; ties go to the
    // lower id to keep results deterministic.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .total_cmp(&self.estimate)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Shortest path from `start` to `goal` over the visibility graph (A* with
/// straight-line distance as the heuristic). `None` when `goal` is
/// unreachable.
pub fn find_path(graph: &NavGraph, start: usize, goal: usize) -> Option<Route> {
    if start >= graph.len() || goal >= graph.len() {
        return None;
    }
    let goal_pos = graph.waypoint(goal).pos;
    let heuristic = |id: usize| distance(graph.waypoint(id).pos, goal_pos);

    let mut cost = vec![f64::INFINITY; graph.len()];
    let mut previous: Vec<Option<usize>> = vec![None; graph.len()];
    let mut closed = vec![false; graph.len()];
    let mut frontier = BinaryHeap::new();

    cost[start] = 0.0;
    frontier.push(Frontier {
        estimate: heuristic(start),
        id: start,
    });

    let mut expanded = 0usize;
    while let Some(Frontier { id, .. }) = frontier.pop() {
        if closed[id] {
            continue;
        }
        if id == goal {
            break;
        }
        closed[id] = true;
        expanded += 1;

        let here = graph.waypoint(id).pos;
        for &next in graph.neighbors(id) {
            if closed[next] {
                continue;
            }
            let candidate = cost[id] + distance(here, graph.waypoint(next).pos);
            if candidate < cost[next] {
                cost[next] = candidate;
                previous[next] = Some(id);
                frontier.push(Frontier {
                    estimate: candidate + heuristic(next),
                    id: next,
                });
            }
        }
    }
    debug!("find_path {start}->{goal}: expanded={expanded}");

    if !cost[goal].is_finite() {
        return None;
    }
    let mut waypoints = vec![goal];
    let mut cur = goal;
    while let Some(prev) = previous[cur] {
        waypoints.push(prev);
        cur = prev;
    }
    waypoints.reverse();
    Some(Route {
        waypoints,
        length_px: cost[goal],
    })
}
