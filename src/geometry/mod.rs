mod pyramid;

pub use pyramid::{draw_square_pyramid, pyramid_style, Pyramid, PyramidSize, PYRAMID_ALPHA};
