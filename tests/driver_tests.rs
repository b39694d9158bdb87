use bone_viz::config::PlotConfig;
use bone_viz::geometry::{pyramid_style, Pyramid, PyramidSize};
use bone_viz::math::quaternion_to_rotation_matrix;
use bone_viz::plot::{render, Axes3D, Canvas, Color, PolyStyle};
use bone_viz::{build_figure, plot_poses, BONE_POSES};
use glam::DVec3;

#[cfg(test)]
mod driver_tests {
    use super::*;

    fn default_style() -> PolyStyle {
        pyramid_style(Color::CYAN, Color::BLACK)
    }

    fn cyan_pixels(canvas: &Canvas) -> usize {
        canvas
            .pixels()
            .chunks_exact(4)
            .filter(|px| px[1] > px[0].saturating_add(40) && px[2] > px[0].saturating_add(40))
            .count()
    }

    #[test]
    fn test_builtin_poses_add_four_pyramids() {
        let mut ax = Axes3D::new();
        let drawn = plot_poses(&mut ax, &BONE_POSES, PyramidSize::default(), default_style());

        assert_eq!(drawn, 4);
        assert_eq!(ax.collections().len(), 4);
        for collection in ax.collections() {
            assert_eq!(collection.faces().len(), 5);
            assert_eq!(collection.style(), &default_style());
        }
    }

    #[test]
    fn test_collections_follow_pose_order() {
        let mut ax = Axes3D::new();
        plot_poses(&mut ax, &BONE_POSES, PyramidSize::default(), default_style());

        for (pose, collection) in BONE_POSES.iter().zip(ax.collections()) {
            let expected = Pyramid::new(
                DVec3::from_array(pose.position),
                quaternion_to_rotation_matrix(pose.orientation),
                PyramidSize::default(),
            );
            assert_eq!(collection.faces(), &expected.faces()[..]);
        }
    }

    #[test]
    fn test_near_zero_quaternion_keeps_pyramid_upright() {
        // The first built-in orientation is almost all zeros, so R is almost identity
        let mut ax = Axes3D::new();
        plot_poses(&mut ax, &BONE_POSES[..1], PyramidSize::default(), default_style());

        let apex = ax.collections()[0].faces()[0][2];
        assert!(apex.abs_diff_eq(DVec3::new(0.0, 0.0, 0.2), 1e-6));
    }

    #[test]
    fn test_rendered_figure_shows_pyramids() {
        let config = PlotConfig::default();
        let with_poses = render(&build_figure(&config, &BONE_POSES), 800, 600);
        let without = render(&build_figure(&config, &[]), 800, 600);

        assert_eq!(with_poses.dimensions(), (800, 600));
        assert!(cyan_pixels(&with_poses) > 10);
        assert_eq!(cyan_pixels(&without), 0);
    }

    #[test]
    fn test_oversized_pyramids_render() {
        // Edges project to millions of pixels; only the on-canvas part is rasterized
        let config = PlotConfig {
            pyramid: PyramidSize { base_size: 1e9, height: 1e9 },
            ..PlotConfig::default()
        };
        let canvas = render(&build_figure(&config, &BONE_POSES), 200, 150);
        assert_eq!(canvas.dimensions(), (200, 150));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let figure = build_figure(&PlotConfig::default(), &BONE_POSES);
        let a = render(&figure, 160, 120);
        let b = render(&figure, 160, 120);
        assert_eq!(a.pixels(), b.pixels());
    }
}
