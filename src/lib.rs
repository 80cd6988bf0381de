#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod image;
pub mod mission;
pub mod report;
pub mod route;
pub mod scan;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Result, ScanError};
pub use crate::mission::{parse_mission, Mission};
pub use crate::report::ScanReport;
pub use crate::route::{find_path, NavGraph, Route};
pub use crate::scan::{scan_markers, scan_to_writer, write_markers, Marker, MarkerColor};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use marker_scan::prelude::*;
///
/// let data = [[0, 0, 255], [255, 255, 255], [255, 0, 0], [0, 0, 0]];
/// let img = ImageRgb8 { w: 2, h: 2, stride: 2, data: &data };
///
/// let mut out = Vec::new();
/// scan_to_writer(&img, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "n 0 0\nn 1 0\n");
/// ```
pub mod prelude {
    pub use crate::image::io::{load_bgr_image, ColorImage};
    pub use crate::image::{ImageRgb8, ImageView};
    pub use crate::{scan_markers, scan_to_writer, Marker, MarkerColor};
}
