pub mod cli;
pub mod config;
pub mod core;
pub mod driver;
pub mod export;
pub mod geometry;
pub mod math;
pub mod plot;
pub mod pose;
pub mod viewer;

pub use driver::{build_figure, plot_poses};
pub use pose::{Pose, BONE_POSES};
