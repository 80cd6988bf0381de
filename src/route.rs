//! Headless routing over a mission map: wall geometry, the waypoint
//! visibility graph and A* search.
pub mod geometry;
pub mod graph;
pub mod search;

pub use self::geometry::{Point, Wall};
pub use self::graph::NavGraph;
pub use self::search::{find_path, Route, FEET_PER_PIXEL};
