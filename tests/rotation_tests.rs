use bone_viz::math::{quaternion_norm_deviation, quaternion_to_rotation_matrix};
use glam::{DMat3, DVec3};

#[cfg(test)]
mod rotation_tests {
    use super::*;

    fn assert_orthonormal(m: DMat3) {
        let product = m * m.transpose();
        assert!(
            product.abs_diff_eq(DMat3::IDENTITY, 1e-12),
            "R * R^T should be identity, got {product:?}"
        );
    }

    fn normalized(q: [f64; 4]) -> [f64; 4] {
        let n = q.iter().map(|c| c * c).sum::<f64>().sqrt();
        q.map(|c| c / n)
    }

    #[test]
    fn test_identity_quaternion_gives_identity_matrix() {
        assert_eq!(quaternion_to_rotation_matrix([1.0, 0.0, 0.0, 0.0]), DMat3::IDENTITY);
    }

    #[test]
    fn test_unit_quaternions_give_orthonormal_matrices() {
        let samples = [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
            [0.5, 0.5, 0.5, 0.5],
            normalized([0.3, -0.2, 0.9, 0.1]),
            normalized([-0.7, 0.1, 0.4, -0.6]),
        ];

        for q in samples {
            let m = quaternion_to_rotation_matrix(q);
            assert_orthonormal(m);
            assert!((m.determinant() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_quarter_turn_about_z() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let m = quaternion_to_rotation_matrix([h, 0.0, 0.0, h]);

        let rotated = m * DVec3::new(0.1, -0.1, 0.0);
        assert!(rotated.abs_diff_eq(DVec3::new(0.1, 0.1, 0.0), 1e-12));
        assert!((m * DVec3::X).abs_diff_eq(DVec3::Y, 1e-12));
    }

    #[test]
    fn test_opposite_quaternions_agree() {
        let q = normalized([0.3, -0.2, 0.9, 0.1]);
        let a = quaternion_to_rotation_matrix(q);
        let b = quaternion_to_rotation_matrix(q.map(|c| -c));
        assert!(a.abs_diff_eq(b, 1e-15));
    }

    #[test]
    fn test_non_unit_quaternion_is_not_normalized() {
        // Same shape as the third built-in pose: w and x near zero
        let q = [0.0, 0.0, -0.39690524, 0.0];
        let m = quaternion_to_rotation_matrix(q);

        assert!(quaternion_norm_deviation(q) > 0.8);
        assert!(!(m * m.transpose()).abs_diff_eq(DMat3::IDENTITY, 1e-3));
        // Diagonal entries follow the formula literally
        assert!((m.x_axis.x - (1.0 - 2.0 * 0.39690524f64.powi(2))).abs() < 1e-12);
        assert_eq!(m.y_axis.y, 1.0);
    }
}
