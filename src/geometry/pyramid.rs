use glam::{DMat3, DVec3};

use crate::plot::{Axes3D, Color, Poly3DCollection, PolyStyle};

/// Half-width of the square base and apex height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidSize {
    pub base_size: f64,
    pub height: f64,
}

impl Default for PyramidSize {
    fn default() -> Self {
        Self {
            base_size: 0.1,
            height: 0.2,
        }
    }
}

/// Square pyramid in world space
/// 4 triangular sides + 1 square base = 5 faces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pyramid {
    /// Base corners, counter-clockwise seen from the apex side
    pub base: [DVec3; 4],
    pub apex: DVec3,
}

impl Pyramid {
    /// Builds the pyramid in the local XY plane, then rotates and translates it.
    /// Sizes are not validated; zero or negative values give a degenerate mesh.
    pub fn new(position: DVec3, rotation: DMat3, size: PyramidSize) -> Self {
        let s = size.base_size;
        let local_base = [
            DVec3::new(-s, -s, 0.0),
            DVec3::new(s, -s, 0.0),
            DVec3::new(s, s, 0.0),
            DVec3::new(-s, s, 0.0),
        ];

        Self {
            base: local_base.map(|v| rotation * v + position),
            apex: position + rotation * DVec3::new(0.0, 0.0, size.height),
        }
    }

    /// Four sides joining consecutive base corners to the apex, then the base
    pub fn faces(&self) -> [Vec<DVec3>; 5] {
        let [b0, b1, b2, b3] = self.base;
        let apex = self.apex;
        [
            vec![b0, b1, apex],
            vec![b1, b2, apex],
            vec![b2, b3, apex],
            vec![b3, b0, apex],
            vec![b0, b1, b2, b3],
        ]
    }

    /// All five vertices, base first
    pub fn vertices(&self) -> [DVec3; 5] {
        let [b0, b1, b2, b3] = self.base;
        [b0, b1, b2, b3, self.apex]
    }
}

/// Opacity shared by pyramid faces and edges
pub const PYRAMID_ALPHA: f64 = 0.5;

/// Half-transparent faces and edges, one pixel wide
pub fn pyramid_style(face_color: Color, edge_color: Color) -> PolyStyle {
    PolyStyle::new(face_color, edge_color, PYRAMID_ALPHA, 1)
}

/// Builds a pyramid at the pose and adds it to the axes as one collection
pub fn draw_square_pyramid(
    ax: &mut Axes3D,
    position: DVec3,
    rotation: DMat3,
    size: PyramidSize,
    style: PolyStyle,
) -> Pyramid {
    let pyramid = Pyramid::new(position, rotation, size);
    ax.add_collection3d(Poly3DCollection::new(pyramid.faces().to_vec(), style));
    pyramid
}
