use pixel_probe::gradient::{max_gradient, min_gradient, RingParams};
use pixel_probe::types::GradientResult;
use pixel_probe::{DecodedImage, PixelBuffer, PixelSource, Rgb24};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ProbeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub ring: RingParams,
    /// Explicit reference color (`0xRRGGBB`); probes compare against the
    /// pixel's own color when absent.
    #[serde(default)]
    pub reference: Option<Rgb24>,
    pub points: Vec<ProbePoint>,
    pub output: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct ProbePoint {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Serialize)]
pub struct PointReport {
    pub x: usize,
    pub y: usize,
    pub min: Option<GradientResult>,
    pub max: Option<GradientResult>,
}

#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub input: PathBuf,
    pub width: usize,
    pub height: usize,
    pub points: Vec<PointReport>,
}

pub fn load_config(path: &Path) -> Result<ProbeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn usage() -> String {
    "Usage: grad_probe <config.json>".to_string()
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let decoded = load_rgba_image(&config.input)?;
    let buffer = PixelBuffer::from_source(PixelSource::Decoded(decoded))
        .map_err(|e| format!("Failed to build pixel buffer: {e}"))?;

    let mut points = Vec::with_capacity(config.points.len());
    for p in &config.points {
        if p.x >= buffer.width() || p.y >= buffer.height() {
            return Err(format!(
                "Probe point ({}, {}) outside {}x{} image",
                p.x,
                p.y,
                buffer.width(),
                buffer.height()
            ));
        }
        points.push(PointReport {
            x: p.x,
            y: p.y,
            min: min_gradient(&buffer, p.x, p.y, config.reference, &config.ring),
            max: max_gradient(&buffer, p.x, p.y, config.reference, &config.ring),
        });
    }

    let report = ProbeReport {
        input: config.input.clone(),
        width: buffer.width(),
        height: buffer.height(),
        points,
    };
    write_json_file(&config.output, &report)?;
    println!(
        "Wrote {} probes to {}",
        report.points.len(),
        config.output.display()
    );
    Ok(())
}

/// Decode an image from disk into full-frame RGBA.
fn load_rgba_image(path: &Path) -> Result<DecodedImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(DecodedImage {
        width,
        height,
        rgba: img.into_raw(),
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}
