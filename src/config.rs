use crate::error::{Result, ScanError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Map scanned when no config file is given.
pub const DEFAULT_INPUT: &str = "map5.png";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanToolConfig {
    pub input: PathBuf,
    pub output: OutputConfig,
    pub survey: SurveyConfig,
}

impl Default for ScanToolConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: OutputConfig::default(),
            survey: SurveyConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `n <row> <col>` lines only.
    #[default]
    Text,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// When unset, JSON goes to stdout.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SurveyConfig {
    /// List colours outside black, white and the two markers.
    pub stray_colors: bool,
}

pub fn load_config(path: &Path) -> Result<ScanToolConfig> {
    let data = fs::read_to_string(path)
        .map_err(|e| ScanError::Config(format!("failed to read {}: {e}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|e| ScanError::Config(format!("failed to parse {}: {e}", path.display())))
}

/// Resolve the runtime config from process arguments (program name excluded).
///
/// No argument keeps the fixed default input; one argument names a JSON config.
pub fn parse_cli<I>(program: &str, args: I) -> Result<ScanToolConfig>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (None, _) => Ok(ScanToolConfig::default()),
        (Some(path), None) => load_config(Path::new(&path)),
        (Some(_), Some(_)) => Err(ScanError::Usage(usage(program))),
    }
}

fn usage(program: &str) -> String {
    format!("Usage: {program} [config.json]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_scan_default_map() {
        let cfg = parse_cli("marker_scan", Vec::new()).unwrap();
        assert_eq!(cfg.input, PathBuf::from("map5.png"));
        assert_eq!(cfg.output.format, OutputFormat::Text);
        assert!(!cfg.survey.stray_colors);
    }

    #[test]
    fn too_many_arguments_is_usage_error() {
        let args = vec!["a.json".to_string(), "b.json".to_string()];
        let err = parse_cli("marker_scan", args).unwrap_err();
        assert!(matches!(err, ScanError::Usage(ref msg) if msg.contains("[config.json]")));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg: ScanToolConfig =
            serde_json::from_str(r#"{ "output": { "format": "both" } }"#).unwrap();
        assert_eq!(cfg.input, PathBuf::from(DEFAULT_INPUT));
        assert!(cfg.output.format.includes_text());
        assert!(cfg.output.format.includes_json());
        assert_eq!(cfg.output.json_out, None);
    }

    #[test]
    fn full_json_config() {
        let cfg: ScanToolConfig = serde_json::from_str(
            r#"{
                "input": "maps/floor2.png",
                "output": { "format": "json", "json_out": "out/floor2.json" },
                "survey": { "stray_colors": true }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.input, PathBuf::from("maps/floor2.png"));
        assert!(!cfg.output.format.includes_text());
        assert_eq!(cfg.output.json_out, Some(PathBuf::from("out/floor2.json")));
        assert!(cfg.survey.stray_colors);
    }

    #[test]
    fn unreadable_config_is_config_error() {
        let err = load_config(Path::new("/nonexistent/marker_scan.json")).unwrap_err();
        assert!(matches!(err, ScanError::Config(_)));
    }
}
