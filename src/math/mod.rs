mod quaternion;

pub use quaternion::{quaternion_norm_deviation, quaternion_to_rotation_matrix, Quaternion};
