//! Exact-colour marker scan.
//!
//! A map marks points of interest with single pixels of pure red or pure
//! blue. Pixels are stored blue, green, red, so a red marker is `[0, 0, 255]`
//! and a blue one `[255, 0, 0]`. The scan visits every pixel once in
//! row-major order and reports each match as a `n <row> <col>` line.
//! Matching is exact per channel; `[0, 0, 254]` is not a marker.
use crate::image::{ImageView, Pixel3};
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, Write};

pub const BLACK: Pixel3 = [0, 0, 0];
pub const WHITE: Pixel3 = [255, 255, 255];

/// Colours expected on a clean map: background, walls and both markers.
pub const KNOWN_PALETTE: [Pixel3; 4] = [
    BLACK,
    WHITE,
    MarkerColor::Blue.pixel(),
    MarkerColor::Red.pixel(),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    /// Stored as `[255, 0, 0]`.
    Blue,
    /// Stored as `[0, 0, 255]`.
    Red,
}

impl MarkerColor {
    pub const fn pixel(self) -> Pixel3 {
        match self {
            MarkerColor::Blue => [255, 0, 0],
            MarkerColor::Red => [0, 0, 255],
        }
    }

    #[inline]
    pub fn classify(px: Pixel3) -> Option<MarkerColor> {
        match px {
            [255, 0, 0] => Some(MarkerColor::Blue),
            [0, 0, 255] => Some(MarkerColor::Red),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Marker {
    pub row: usize,
    pub col: usize,
    pub color: MarkerColor,
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n {} {}", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarkerCounts {
    pub blue: usize,
    pub red: usize,
}

pub fn count_by_color(markers: &[Marker]) -> MarkerCounts {
    markers
        .iter()
        .fold(MarkerCounts::default(), |mut acc, m| {
            match m.color {
                MarkerColor::Blue => acc.blue += 1,
                MarkerColor::Red => acc.red += 1,
            }
            acc
        })
}

/// Collect every marker pixel in row-major order.
pub fn scan_markers<I>(image: &I) -> Vec<Marker>
where
    I: ImageView<Pixel = Pixel3>,
{
    let markers: Vec<Marker> = image
        .pixels()
        .filter_map(|(row, col, px)| {
            MarkerColor::classify(px).map(|color| Marker { row, col, color })
        })
        .collect();

    let counts = count_by_color(&markers);
    debug!(
        "scan_markers {}x{} -> blue={} red={}",
        image.width(),
        image.height(),
        counts.blue,
        counts.red
    );
    markers
}

/// Write one `n <row> <col>` line per marker, in slice order.
pub fn write_markers<W: Write>(markers: &[Marker], mut out: W) -> io::Result<()> {
    for m in markers {
        writeln!(out, "{m}")?;
    }
    out.flush()
}

/// Scan `image` and stream the marker lines to `out`. Returns the marker count.
pub fn scan_to_writer<I, W>(image: &I, out: W) -> io::Result<usize>
where
    I: ImageView<Pixel = Pixel3>,
    W: Write,
{
    let markers = scan_markers(image);
    write_markers(&markers, out)?;
    info!("wrote {} marker lines", markers.len());
    Ok(markers.len())
}

/// Every distinct pixel value present in `image`.
pub fn distinct_colors<I>(image: &I) -> BTreeSet<Pixel3>
where
    I: ImageView<Pixel = Pixel3>,
{
    image.rows().flat_map(|row| row.iter().copied()).collect()
}

/// Colours present in `image` that are not in [`KNOWN_PALETTE`], ascending.
///
/// Anti-aliasing or a lossy export shows up here as near-marker shades that
/// the exact scan silently skips.
pub fn stray_colors<I>(image: &I) -> Vec<Pixel3>
where
    I: ImageView<Pixel = Pixel3>,
{
    let mut colors = distinct_colors(image);
    for known in KNOWN_PALETTE {
        colors.remove(&known);
    }
    if !colors.is_empty() {
        warn!(
            "{} stray colours outside the map palette: {:?}",
            colors.len(),
            colors
        );
    }
    colors.into_iter().collect()
}
