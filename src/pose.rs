use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::math::Quaternion;

/// Position and orientation of one bone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: [f64; 3],
    /// `(w, x, y, z)`
    pub orientation: Quaternion,
}

impl Pose {
    pub const fn new(position: [f64; 3], orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

/// Bone poses shown when no pose file is given.
pub const BONE_POSES: [Pose; 4] = [
    Pose::new(
        [0.00000000000008440351, 0.000000000000000000000000000014965666, 0.00000011920929],
        [0.000000009157396, -0.000000024203244, 0.0000000000000008865547, 0.0],
    ),
    Pose::new(
        [-0.000000000000018485984, -2.5, 0.0000003565728],
        [0.00000000021100277, -0.0000000000000053290705, 0.0000000000000002318526, 0.0],
    ),
    Pose::new(
        [-0.00000000000021809006, -2.5, 0.0000007099429],
        [0.00000012145742, -0.000000073510044, -0.39690524, 0.0],
    ),
    Pose::new(
        [1.1285541, -2.7692232, 0.0000011836073],
        [0.00000011667257, 0.00000012777278, -0.599056, 0.0],
    ),
];

/// Parses a JSON array of poses.
pub fn parse_poses(json: &str) -> Result<Vec<Pose>> {
    serde_json::from_str(json).context("Failed to parse pose list")
}

/// Loads poses from a JSON file.
pub fn load_poses(path: impl AsRef<Path>) -> Result<Vec<Pose>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read pose file: {}", path.display()))?;
    parse_poses(&json).with_context(|| format!("Invalid pose file: {}", path.display()))
}
