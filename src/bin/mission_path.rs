use marker_scan::mission::{load_mission, Mission};
use marker_scan::route::{find_path, NavGraph, Route};
use marker_scan::{Result, ScanError};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (mission_path, names) = match args.as_slice() {
        [path] => (path, None),
        [path, from, to] => (path, Some((from.as_str(), to.as_str()))),
        _ => return Err(ScanError::Usage(usage())),
    };

    let mission = load_mission(Path::new(mission_path))?;
    let (start, goal) = resolve_endpoints(&mission, names)?;
    let graph = NavGraph::from_mission(&mission);

    let t0 = Instant::now();
    let route = find_path(&graph, start, goal);
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    match route {
        Some(route) => {
            print_route(&graph, &route, elapsed_ms);
            Ok(())
        }
        None => Err(ScanError::Route(format!(
            "no path from waypoint {start} to waypoint {goal}"
        ))),
    }
}

fn resolve_endpoints(mission: &Mission, names: Option<(&str, &str)>) -> Result<(usize, usize)> {
    let lookup = |name: &str| {
        mission
            .find_named(name)
            .ok_or_else(|| ScanError::Route(format!("no waypoint named {name:?}")))
    };
    match names {
        Some((from, to)) => Ok((lookup(from)?, lookup(to)?)),
        None => {
            let start = mission
                .start
                .ok_or_else(|| ScanError::Route("mission has no start (`s`) line".into()))?;
            let end = mission
                .end
                .ok_or_else(|| ScanError::Route("mission has no end (`e`) line".into()))?;
            Ok((start, end))
        }
    }
}

fn print_route(graph: &NavGraph, route: &Route, elapsed_ms: f64) {
    println!("Path found in: {elapsed_ms:.3} ms");
    println!("Path length: {:.1} ft", route.length_ft());
    for &id in &route.waypoints {
        let wp = graph.waypoint(id);
        match &wp.name {
            Some(name) => println!("  {} {} {}", wp.pos[0], wp.pos[1], name),
            None => println!("  {} {}", wp.pos[0], wp.pos[1]),
        }
    }
}

fn usage() -> String {
    "Usage: mission_path <mission.txt> [<from-name> <to-name>]".to_string()
}
