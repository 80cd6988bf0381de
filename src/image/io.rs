//! I/O helpers for 3-channel map images and JSON.
//!
//! - `load_bgr_image`: read a PNG/BMP/etc. into an owned buffer with channels
//!   stored blue, green, red.
//! - `save_bgr_image`: write such a buffer back to disk.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageRgb8, Pixel3};
use crate::error::{Result, ScanError};
use image::{Rgb, RgbImage};
use log::debug;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 3-channel 8-bit buffer, row-major and tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorImage {
    width: usize,
    height: usize,
    data: Vec<Pixel3>,
}

impl ColorImage {
    /// Wrap `data` as a `width` x `height` grid.
    pub fn new(width: usize, height: usize, data: Vec<Pixel3>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .ok_or_else(|| ScanError::Buffer(format!("{width}x{height} overflows")))?;
        if data.len() != expected {
            return Err(ScanError::Buffer(format!(
                "{width}x{height} image needs {expected} pixels, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from nested rows; every row must have the same length.
    pub fn from_rows(rows: &[Vec<Pixel3>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            return Err(ScanError::Buffer(format!(
                "row {bad} has {} pixels, expected {width}",
                rows[bad].len()
            )));
        }
        let data = rows.iter().flatten().copied().collect();
        Self::new(width, rows.len(), data)
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgb8` view
    pub fn as_view(&self) -> ImageRgb8<'_> {
        ImageRgb8::packed(self.width, self.height, &self.data)
    }
}

/// Load an image from disk, keeping three channels in blue, green, red order.
///
/// Alpha is discarded. Samples are widened to 16 bits and narrowed back with
/// `v >> 8`, which is exact for 8-bit files and truncates deeper ones (a
/// 16-bit `65280` becomes `255`, not the rounded `254`). Any failure to read
/// or decode is returned as [`ScanError::ImageLoad`].
pub fn load_bgr_image(path: &Path) -> Result<ColorImage> {
    let img = image::open(path)
        .map_err(|source| ScanError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb16();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .pixels()
        .map(|Rgb([r, g, b])| [narrow(*b), narrow(*g), narrow(*r)])
        .collect();
    debug!("loaded {} ({}x{})", path.display(), width, height);
    ColorImage::new(width, height, data)
}

#[inline]
fn narrow(v: u16) -> u8 {
    (v >> 8) as u8
}

/// Save a blue, green, red buffer; the format follows the file extension.
pub fn save_bgr_image(image: &ColorImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut out = RgbImage::new(image.width as u32, image.height as u32);
    for (y, row) in image.data.chunks(image.width.max(1)).enumerate() {
        for (x, &[b, g, r]) in row.iter().enumerate() {
            out.put_pixel(x as u32, y as u32, Rgb([r, g, b]));
        }
    }
    out.save(path).map_err(|source| ScanError::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageView;
    use crate::scan::{scan_markers, MarkerColor};
    use image::ImageBuffer;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("marker_scan_io_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn new_rejects_mismatched_length() {
        let err = ColorImage::new(2, 2, vec![[0, 0, 0]; 3]).unwrap_err();
        assert!(matches!(err, ScanError::Buffer(_)), "got {err:?}");
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let rows = vec![vec![[0, 0, 0]; 2], vec![[0, 0, 0]; 1]];
        assert!(ColorImage::from_rows(&rows).is_err());
    }

    #[test]
    fn from_rows_of_nothing_is_empty() {
        let img = ColorImage::from_rows(&[]).unwrap();
        assert_eq!((img.width(), img.height()), (0, 0));
        assert!(img.as_view().is_empty());
    }

    #[test]
    fn png_keeps_channel_order_through_disk() {
        let img = ColorImage::from_rows(&[
            vec![[0, 0, 255], [10, 20, 30]],
            vec![[255, 0, 0], [255, 255, 255]],
        ])
        .unwrap();
        let path = scratch_path("order.png");
        save_bgr_image(&img, &path).unwrap();

        let loaded = load_bgr_image(&path).unwrap();
        assert_eq!(loaded, img);
        assert_eq!(loaded.as_view().get(1, 0), [10, 20, 30]);

        // On disk the first pixel is stored as pure red in RGB order.
        let raw = image::open(&path).unwrap().into_rgb8();
        assert_eq!(raw.get_pixel(0, 0).0, [255, 0, 0]);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn red_png_pixel_is_labelled_red() {
        let path = scratch_path("red.png");
        let mut raw = RgbImage::new(2, 1);
        raw.put_pixel(0, 0, Rgb([255, 0, 0]));
        raw.put_pixel(1, 0, Rgb([0, 0, 255]));
        raw.save(&path).unwrap();

        let loaded = load_bgr_image(&path).unwrap();
        let colors: Vec<_> = scan_markers(&loaded.as_view())
            .iter()
            .map(|m| m.color)
            .collect();
        assert_eq!(colors, vec![MarkerColor::Red, MarkerColor::Blue]);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn sixteen_bit_samples_truncate_to_eight() {
        let path = scratch_path("deep.png");
        let raw: ImageBuffer<Rgb<u16>, Vec<u16>> =
            ImageBuffer::from_pixel(1, 1, Rgb([65280, 0, 255]));
        raw.save(&path).unwrap();

        let loaded = load_bgr_image(&path).unwrap();
        assert_eq!(loaded.as_view().get(0, 0), [0, 0, 255]);
        assert_eq!(
            MarkerColor::classify(loaded.as_view().get(0, 0)),
            Some(MarkerColor::Red)
        );
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_an_image_load_error() {
        let path = scratch_path("does_not_exist.png");
        match load_bgr_image(&path) {
            Err(ScanError::ImageLoad { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ImageLoad, got {other:?}"),
        }
    }
}
