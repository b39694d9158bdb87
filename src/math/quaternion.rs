use glam::{DMat3, DVec3};

/// Orientation quaternion in `(w, x, y, z)` order.
pub type Quaternion = [f64; 4];

/// Converts a quaternion to a 3x3 rotation matrix with the closed-form formula.
///
/// The input is used as given. A non-unit quaternion produces a scaled or
/// skewed matrix instead of a rotation; see [`quaternion_norm_deviation`].
pub fn quaternion_to_rotation_matrix(q: Quaternion) -> DMat3 {
    let [w, x, y, z] = q;

    // glam matrices are column-major, so each DVec3 below is a column.
    DMat3::from_cols(
        DVec3::new(
            1.0 - 2.0 * y * y - 2.0 * z * z,
            2.0 * x * y + 2.0 * z * w,
            2.0 * x * z - 2.0 * y * w,
        ),
        DVec3::new(
            2.0 * x * y - 2.0 * z * w,
            1.0 - 2.0 * x * x - 2.0 * z * z,
            2.0 * y * z + 2.0 * x * w,
        ),
        DVec3::new(
            2.0 * x * z + 2.0 * y * w,
            2.0 * y * z - 2.0 * x * w,
            1.0 - 2.0 * x * x - 2.0 * y * y,
        ),
    )
}

/// Distance of the squared norm from 1.
pub fn quaternion_norm_deviation(q: Quaternion) -> f64 {
    let norm_sq: f64 = q.iter().map(|c| c * c).sum();
    (norm_sq - 1.0).abs()
}
