//! Software 3D axes: polygon collections, projection and rasterization.

mod axes;
mod canvas;
mod color;
mod font;
mod render;
mod ticks;
mod view;

pub use axes::{Axes3D, Axis, Poly3DCollection, PolyStyle};
pub use canvas::{Canvas, DrawOp};
pub use color::Color;
pub use render::render;
pub use ticks::{format_tick, nice_step, ticks};
pub use view::{Projection, ScreenPoint, View, DEFAULT_AZIM, DEFAULT_ELEV};
