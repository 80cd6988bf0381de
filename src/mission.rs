//! Mission files: the text map that routing runs on.
//!
//! One command per line, a command character followed by whitespace
//! separated fields:
//!
//! | line              | meaning                                   |
//! |-------------------|-------------------------------------------|
//! | `# ...`           | comment                                   |
//! | `n x y`           | waypoint                                  |
//! | `N x y name`      | named waypoint (a selectable destination) |
//! | `s x y` / `e x y` | start / end waypoint                      |
//! | `o x1 y1 x2 y2`   | wall segment                              |
//! | `b x1 y1 x2 y2`   | axis-aligned box of four walls            |
//!
//! Lines shorter than three characters are ignored and unknown commands are
//! skipped with a warning. `marker_scan` output is a valid mission body: each
//! `n <row> <col>` line becomes a waypoint at `[row, col]`.
use crate::error::{Result, ScanError};
use crate::route::geometry::{Point, Wall};
use log::{debug, warn};
use std::fs;
use std::path::Path;
use std::str::SplitWhitespace;

#[derive(Clone, Debug, PartialEq)]
pub enum MissionCommand {
    Node { pos: Point, name: Option<String> },
    Start(Point),
    End(Point),
    Wall(Wall),
    Box { a: Point, b: Point },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub pos: Point,
    pub name: Option<String>,
}

/// Parsed mission: waypoints in file order plus every wall.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mission {
    pub waypoints: Vec<Waypoint>,
    pub walls: Vec<Wall>,
    /// Index into `waypoints`; a later `s` line replaces an earlier one.
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl Mission {
    pub fn apply(&mut self, cmd: MissionCommand) {
        match cmd {
            MissionCommand::Node { pos, name } => {
                self.waypoints.push(Waypoint { pos, name });
            }
            MissionCommand::Start(pos) => {
                self.start = Some(self.push_unnamed(pos));
            }
            MissionCommand::End(pos) => {
                self.end = Some(self.push_unnamed(pos));
            }
            MissionCommand::Wall(wall) => self.walls.push(wall),
            MissionCommand::Box { a, b } => self.walls.extend(box_walls(a, b)),
        }
    }

    fn push_unnamed(&mut self, pos: Point) -> usize {
        self.waypoints.push(Waypoint { pos, name: None });
        self.waypoints.len() - 1
    }

    pub fn find_named(&self, name: &str) -> Option<usize> {
        self.waypoints
            .iter()
            .position(|w| w.name.as_deref() == Some(name))
    }
}

/// The four edges of the box spanned by opposite corners `a` and `b`.
pub fn box_walls(a: Point, b: Point) -> [Wall; 4] {
    let [x1, y1] = a;
    let [x2, y2] = b;
    [
        Wall::new([x1, y1], [x2, y1]),
        Wall::new([x2, y1], [x2, y2]),
        Wall::new([x1, y1], [x1, y2]),
        Wall::new([x1, y2], [x2, y2]),
    ]
}

/// Parse one line. `Ok(None)` for comments, short lines and unknown commands.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<MissionCommand>> {
    let line = line.trim_end();
    if line.chars().count() < 3 {
        return Ok(None);
    }
    let mut chars = line.chars();
    let cmd = chars.next().unwrap_or('#');
    let mut fields = chars.as_str().split_whitespace();

    let parsed = match cmd {
        '#' => None,
        'n' => Some(MissionCommand::Node {
            pos: point(&mut fields, line_no, "")?,
            name: None,
        }),
        'N' => {
            let pos = point(&mut fields, line_no, "")?;
            let name = fields.next().ok_or_else(|| missing(line_no, "name"))?;
            Some(MissionCommand::Node {
                pos,
                name: Some(name.to_string()),
            })
        }
        's' => Some(MissionCommand::Start(point(&mut fields, line_no, "")?)),
        'e' => Some(MissionCommand::End(point(&mut fields, line_no, "")?)),
        'o' => {
            let a = point(&mut fields, line_no, "1")?;
            let b = point(&mut fields, line_no, "2")?;
            Some(MissionCommand::Wall(Wall::new(a, b)))
        }
        'b' => {
            let a = point(&mut fields, line_no, "1")?;
            let b = point(&mut fields, line_no, "2")?;
            Some(MissionCommand::Box { a, b })
        }
        other => {
            warn!("line {line_no}: unknown mission command {other:?}, skipped");
            None
        }
    };
    Ok(parsed)
}

/// Next two fields as `[x, y]`; `suffix` tags them in errors (`x1`, `y2`).
fn point(fields: &mut SplitWhitespace<'_>, line: usize, suffix: &str) -> Result<Point> {
    Ok([
        coord(fields, line, &format!("x{suffix}"))?,
        coord(fields, line, &format!("y{suffix}"))?,
    ])
}

fn coord(fields: &mut SplitWhitespace<'_>, line: usize, what: &str) -> Result<f32> {
    let raw = fields.next().ok_or_else(|| missing(line, what))?;
    raw.parse::<f32>().map_err(|e| ScanError::Mission {
        line,
        message: format!("bad {what} {raw:?}: {e}"),
    })
}

fn missing(line: usize, what: &str) -> ScanError {
    ScanError::Mission {
        line,
        message: format!("missing {what}"),
    }
}

pub fn parse_mission(text: &str) -> Result<Mission> {
    let mut mission = Mission::default();
    for (idx, line) in text.lines().enumerate() {
        if let Some(cmd) = parse_line(line, idx + 1)? {
            mission.apply(cmd);
        }
    }
    debug!(
        "parsed mission: waypoints={} walls={} start={:?} end={:?}",
        mission.waypoints.len(),
        mission.walls.len(),
        mission.start,
        mission.end
    );
    Ok(mission)
}

pub fn load_mission(path: &Path) -> Result<Mission> {
    let text = fs::read_to_string(path)?;
    parse_mission(&text)
}
