// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};
use crate::plot::{Color, DEFAULT_AZIM, DEFAULT_ELEV};

/// Accepts the color names and single-letter codes known to [`Color::from_name`]
fn parse_color(name: &str) -> Result<Color, String> {
    Color::from_name(name).ok_or_else(|| format!("unknown color name '{name}'"))
}

#[derive(Parser, Debug, Clone)]
#[command(name = "bone-viz")]
#[command(about = "Draws bone poses as pyramids in a 3D plot", long_about = None)]
pub struct Cli {
    /// JSON file with [{"position": [x, y, z], "orientation": [w, x, y, z]}, ...]
    #[arg(long)]
    pub poses: Option<PathBuf>,

    /// Write the rendered plot to a PNG file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Do not open the plot window
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Window and image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub width: u32,

    /// Window and image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(u32).range(1..=MAX_DIMENSION as i64))]
    pub height: u32,

    /// Half-width of each pyramid base
    #[arg(long, default_value_t = 0.1, allow_negative_numbers = true)]
    pub base_size: f64,

    /// Height of each pyramid
    #[arg(long, default_value_t = 0.2, allow_negative_numbers = true)]
    pub pyramid_height: f64,

    /// Initial azimuth in degrees
    #[arg(long, default_value_t = DEFAULT_AZIM, allow_negative_numbers = true)]
    pub azim: f64,

    /// Initial elevation in degrees
    #[arg(long, default_value_t = DEFAULT_ELEV, allow_negative_numbers = true)]
    pub elev: f64,

    /// Pyramid face color (name or single-letter code, e.g. cyan, c, orange)
    #[arg(long, default_value = "cyan", value_parser = parse_color)]
    pub face_color: Color,

    /// Pyramid edge color
    #[arg(long, default_value = "k", value_parser = parse_color)]
    pub edge_color: Color,

    /// Fit axis limits to the pyramids instead of the fixed bounds
    #[arg(long)]
    pub autoscale: bool,
}
