use super::geometry::{Point, Wall};
use crate::mission::{Mission, Waypoint};
use log::debug;

/// Waypoint visibility graph: two waypoints are linked when no wall touches
/// the straight line between them.
#[derive(Clone, Debug, Default)]
pub struct NavGraph {
    waypoints: Vec<Waypoint>,
    walls: Vec<Wall>,
    neighbors: Vec<Vec<usize>>,
}

impl NavGraph {
    pub fn new(walls: Vec<Wall>) -> Self {
        Self {
            walls,
            ..Default::default()
        }
    }

    /// Every wall of the mission is in place before any waypoint is linked,
    /// so line order in the file does not change the graph.
    pub fn from_mission(mission: &Mission) -> Self {
        let mut graph = Self::new(mission.walls.clone());
        for wp in &mission.waypoints {
            graph.add_waypoint(wp.pos, wp.name.clone());
        }
        debug!(
            "NavGraph: waypoints={} walls={} edges={}",
            graph.len(),
            graph.walls.len(),
            graph.edge_count()
        );
        graph
    }

    /// Add a waypoint and link it to every visible existing one.
    pub fn add_waypoint(&mut self, pos: Point, name: Option<String>) -> usize {
        let id = self.waypoints.len();
        let visible: Vec<usize> = self
            .waypoints
            .iter()
            .enumerate()
            .filter(|(_, other)| !self.is_obstructed(pos, other.pos))
            .map(|(idx, _)| idx)
            .collect();
        for &other in &visible {
            self.neighbors[other].push(id);
        }
        self.waypoints.push(Waypoint { pos, name });
        self.neighbors.push(visible);
        id
    }

    pub fn is_obstructed(&self, a: Point, b: Point) -> bool {
        self.walls.iter().any(|w| w.blocks(a, b))
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoint(&self, id: usize) -> &Waypoint {
        &self.waypoints[id]
    }

    pub fn neighbors(&self, id: usize) -> &[usize] {
        &self.neighbors[id]
    }

    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }
}
