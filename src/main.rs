use log::info;
use marker_scan::config::{self, OutputFormat, ScanToolConfig};
use marker_scan::image::io::{load_bgr_image, write_json_file};
use marker_scan::{write_markers, Result, ScanReport};
use std::env;
use std::io::{self, BufWriter, Write};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "marker_scan".to_string());
    let config = config::parse_cli(&program, args)?;

    let image = load_bgr_image(&config.input)?;
    info!(
        "scanning {} ({}x{})",
        config.input.display(),
        image.width(),
        image.height()
    );
    let report = ScanReport::build(&config.input, &image.as_view(), config.survey.stray_colors);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if config.output.format.includes_text() {
        write_markers(&report.markers, &mut out)?;
    }
    if config.output.format.includes_json() {
        emit_json(&config, &report, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn emit_json<W: Write>(config: &ScanToolConfig, report: &ScanReport, out: &mut W) -> Result<()> {
    if let Some(path) = &config.output.json_out {
        write_json_file(path, report)?;
        eprintln!("JSON report written to {}", path.display());
    } else {
        let json = serde_json::to_string_pretty(report)?;
        if config.output.format == OutputFormat::Both {
            writeln!(out, "\nJSON report:\n{json}")?;
        } else {
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
