use glam::DVec3;
use log::{debug, warn};

use crate::config::PlotConfig;
use crate::geometry::{draw_square_pyramid, pyramid_style, PyramidSize};
use crate::math::{quaternion_norm_deviation, quaternion_to_rotation_matrix, Quaternion};
use crate::plot::{Axes3D, Axis, PolyStyle};
use crate::pose::Pose;

/// Squared-norm deviation above which an orientation is reported as non-unit
pub const NORM_WARN_THRESHOLD: f64 = 1e-3;

/// True when `|q|^2` is far enough from 1 to be reported
pub fn is_non_unit(q: Quaternion) -> bool {
    quaternion_norm_deviation(q) > NORM_WARN_THRESHOLD
}

/// Draws one pyramid per pose, in list order. Returns how many were drawn.
pub fn plot_poses(ax: &mut Axes3D, poses: &[Pose], size: PyramidSize, style: PolyStyle) -> usize {
    for (i, pose) in poses.iter().enumerate() {
        if is_non_unit(pose.orientation) {
            warn!(
                "Pose {i}: orientation {:?} is not a unit quaternion (|q|^2 off by {:.3}); drawing it unnormalized",
                pose.orientation,
                quaternion_norm_deviation(pose.orientation)
            );
        }

        let rotation = quaternion_to_rotation_matrix(pose.orientation);
        let pyramid = draw_square_pyramid(ax, DVec3::from_array(pose.position), rotation, size, style);
        debug!("Pose {i}: position {:?}, apex {:?}", pose.position, pyramid.apex);
    }
    poses.len()
}

/// Creates the axes, draws the poses and applies limits and labels
pub fn build_figure(config: &PlotConfig, poses: &[Pose]) -> Axes3D {
    let mut ax = Axes3D::new();
    ax.set_box_aspect(config.box_aspect);
    *ax.view_mut() = config.view;

    let style = pyramid_style(config.face_color, config.edge_color);
    plot_poses(&mut ax, poses, config.pyramid, style);

    if config.autoscale {
        ax.autoscale();
    } else {
        ax.set_xlim(config.xlim.0, config.xlim.1);
        ax.set_ylim(config.ylim.0, config.ylim.1);
        ax.set_zlim(config.zlim.0, config.zlim.1);
    }
    for (axis, label) in Axis::ALL.into_iter().zip(&config.labels) {
        ax.set_label(axis, label.as_str());
    }

    ax
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::Color;
    use crate::pose::BONE_POSES;

    #[test]
    fn test_build_figure_applies_config() {
        let ax = build_figure(&PlotConfig::default(), &BONE_POSES);

        assert_eq!(ax.collections().len(), 4);
        assert_eq!(ax.limits(Axis::X), (-2.5, 2.5));
        assert_eq!(ax.limits(Axis::Y), (-6.0, 6.0));
        assert_eq!(ax.limits(Axis::Z), (-2.5, 2.5));
        assert_eq!(ax.label(Axis::Y), "Y");
        assert_eq!(ax.box_aspect(), DVec3::ONE);
    }

    #[test]
    fn test_autoscale_fits_poses() {
        let config = PlotConfig { autoscale: true, ..PlotConfig::default() };
        let ax = build_figure(&config, &BONE_POSES);

        let (y_min, y_max) = ax.limits(Axis::Y);
        assert!(y_min < -2.7 && y_max > -2.5);
        assert!(y_max < 0.5);
    }

    #[test]
    fn test_empty_pose_list() {
        let mut ax = Axes3D::new();
        let style = pyramid_style(Color::CYAN, Color::BLACK);
        assert_eq!(plot_poses(&mut ax, &[], PyramidSize::default(), style), 0);
        assert!(ax.collections().is_empty());
    }

    #[test]
    fn test_non_unit_detection() {
        assert!(!is_non_unit([1.0, 0.0, 0.0, 0.0]));
        assert!(!is_non_unit([0.5, 0.5, 0.5, 0.5]));
        // Within the threshold: |q|^2 = 1.0005
        assert!(!is_non_unit([1.00025, 0.0, 0.0, 0.0]));
        assert!(is_non_unit([0.0, 0.0, 0.0, 0.0]));
        assert!(is_non_unit([2.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn test_builtin_orientations_are_reported_non_unit() {
        for pose in &BONE_POSES {
            assert!(is_non_unit(pose.orientation), "{:?}", pose.orientation);
        }
    }

    #[test]
    fn test_build_figure_uses_configured_colors() {
        let config = PlotConfig {
            face_color: Color::from_name("orange").unwrap(),
            edge_color: Color::WHITE,
            ..PlotConfig::default()
        };
        let ax = build_figure(&config, &BONE_POSES[..1]);

        let style = ax.collections()[0].style();
        assert_eq!(style.face_color, Color::rgb(255, 165, 0).with_alpha(0.5));
        assert_eq!(style.edge_color, Color::WHITE.with_alpha(0.5));
    }
}
