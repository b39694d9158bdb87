//! Window-side plumbing: GPU presentation and input handling.

pub mod gpu_context;
pub mod input;
pub mod surface_renderer;

pub use gpu_context::GpuContext;
pub use input::{OrbitController, ViewerAction};
pub use surface_renderer::SurfaceRenderer;
