use crate::image::{ImageView, Pixel3};
use crate::scan::{count_by_color, scan_markers, stray_colors, Marker};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Machine-readable summary of one scan.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub input: PathBuf,
    pub width: usize,
    pub height: usize,
    pub marker_count: usize,
    pub blue_count: usize,
    pub red_count: usize,
    pub markers: Vec<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stray_colors: Option<Vec<Pixel3>>,
}

impl ScanReport {
    /// Scan `image`; the stray-colour survey runs only when `survey` is set.
    pub fn build<I>(input: &Path, image: &I, survey: bool) -> Self
    where
        I: ImageView<Pixel = Pixel3>,
    {
        let markers = scan_markers(image);
        let counts = count_by_color(&markers);
        Self {
            input: input.to_path_buf(),
            width: image.width(),
            height: image.height(),
            marker_count: markers.len(),
            blue_count: counts.blue,
            red_count: counts.red,
            markers,
            stray_colors: survey.then(|| stray_colors(image)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageRgb8;

    #[test]
    fn report_counts_and_serializes_camel_case() {
        let data = [[0, 0, 255], [255, 0, 0], [255, 0, 0], [7, 7, 7]];
        let view = ImageRgb8::packed(2, 2, &data);
        let report = ScanReport::build(Path::new("map.png"), &view, false);
        assert_eq!(report.marker_count, 3);
        assert_eq!((report.blue_count, report.red_count), (2, 1));
        assert!(report.stray_colors.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["markerCount"], 3);
        assert_eq!(json["markers"][0]["color"], "red");
        assert_eq!(json["markers"][1]["color"], "blue");
        assert_eq!(json["markers"][2]["row"], 1);
        assert!(json.get("strayColors").is_none());
    }

    #[test]
    fn survey_adds_stray_colors() {
        let data = [[0, 0, 0], [7, 7, 7]];
        let view = ImageRgb8::packed(2, 1, &data);
        let report = ScanReport::build(Path::new("map.png"), &view, true);
        assert_eq!(report.stray_colors, Some(vec![[7, 7, 7]]));
    }
}
