use crate::cli::Cli;
use crate::geometry::PyramidSize;
use crate::plot::{Color, View};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
/// Largest accepted window or image side; the canvas is allocated at full size
pub const MAX_DIMENSION: u32 = 16384;

/// Everything that shapes the figure, independent of where poses come from
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    pub xlim: (f64, f64),
    pub ylim: (f64, f64),
    pub zlim: (f64, f64),
    pub labels: [String; 3],
    pub box_aspect: [f64; 3],
    pub pyramid: PyramidSize,
    pub face_color: Color,
    pub edge_color: Color,
    pub width: u32,
    pub height: u32,
    pub view: View,
    /// Fit limits to the data instead of using the fixed ones
    pub autoscale: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            xlim: (-2.5, 2.5),
            ylim: (-6.0, 6.0),
            zlim: (-2.5, 2.5),
            labels: ["X".into(), "Y".into(), "Z".into()],
            box_aspect: [1.0, 1.0, 1.0],
            pyramid: PyramidSize::default(),
            face_color: Color::CYAN,
            edge_color: Color::BLACK,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            view: View::default(),
            autoscale: false,
        }
    }
}

impl From<&Cli> for PlotConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            pyramid: PyramidSize {
                base_size: cli.base_size,
                height: cli.pyramid_height,
            },
            face_color: cli.face_color,
            edge_color: cli.edge_color,
            width: cli.width,
            height: cli.height,
            view: View::new(cli.azim, cli.elev),
            autoscale: cli.autoscale,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_cli_matches_default_config() {
        let cli = Cli::parse_from(["bone-viz"]);
        assert_eq!(PlotConfig::from(&cli), PlotConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "bone-viz",
            "--width",
            "320",
            "--height",
            "16384",
            "--base-size",
            "0.25",
            "--pyramid-height",
            "0.5",
            "--elev",
            "120",
            "--autoscale",
            "--face-color",
            "m",
        ]);
        let config = PlotConfig::from(&cli);

        assert_eq!(config.width, 320);
        assert_eq!(config.height, MAX_DIMENSION);
        assert_eq!(config.face_color, Color::rgb(191, 0, 191));
        assert_eq!(config.edge_color, Color::BLACK);
        assert_eq!(config.pyramid, PyramidSize { base_size: 0.25, height: 0.5 });
        assert_eq!(config.view.elev, 90.0);
        assert!(config.autoscale);
    }

    #[test]
    fn test_image_size_bounds() {
        for size in ["0", "16385", "100000"] {
            let result = Cli::try_parse_from(["bone-viz", "--width", size]);
            assert!(result.is_err(), "width {size} accepted");
            let result = Cli::try_parse_from(["bone-viz", "--height", size]);
            assert!(result.is_err(), "height {size} accepted");
        }
        assert!(Cli::try_parse_from(["bone-viz", "--width", "1", "--height", "1"]).is_ok());
    }

    #[test]
    fn test_unknown_color_rejected() {
        let err = Cli::try_parse_from(["bone-viz", "--edge-color", "chartreuse-ish"]).unwrap_err();
        assert!(err.to_string().contains("chartreuse-ish"));
    }
}
