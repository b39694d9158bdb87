use glam::DVec3;

pub const DEFAULT_AZIM: f64 = -60.0;
pub const DEFAULT_ELEV: f64 = 30.0;

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 10.0;
/// Fraction of the shorter window side covered by the box at zoom 1
const FILL: f64 = 0.8;

/// Viewing angles in degrees plus a zoom factor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View {
    pub azim: f64,
    pub elev: f64,
    pub zoom: f64,
}

impl Default for View {
    fn default() -> Self {
        Self::new(DEFAULT_AZIM, DEFAULT_ELEV)
    }
}

impl View {
    pub fn new(azim: f64, elev: f64) -> Self {
        Self {
            azim,
            elev: elev.clamp(-90.0, 90.0),
            zoom: 1.0,
        }
    }

    /// Unit vector from the scene toward the viewer
    pub fn eye_direction(&self) -> DVec3 {
        let (a, e) = (self.azim.to_radians(), self.elev.to_radians());
        DVec3::new(e.cos() * a.cos(), e.cos() * a.sin(), e.sin())
    }

    /// Screen right, screen up and toward-viewer axes
    pub fn basis(&self) -> (DVec3, DVec3, DVec3) {
        let toward = self.eye_direction();
        let a = self.azim.to_radians();
        // Z x toward, without the cos(elev) factor so it survives elev = ±90
        let right = DVec3::new(-a.sin(), a.cos(), 0.0);
        let up = toward.cross(right);
        (right, up, toward)
    }

    pub fn rotate(&mut self, d_azim: f64, d_elev: f64) {
        self.azim = (self.azim + d_azim + 180.0).rem_euclid(360.0) - 180.0;
        self.elev = (self.elev + d_elev).clamp(-90.0, 90.0);
    }

    pub fn zoom_by(&mut self, factor: f64) {
        if factor.is_finite() && factor > 0.0 {
            self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub fn reset(&mut self, initial: View) {
        *self = initial;
    }

    /// Orthographic projection fitting a box with the given half extents
    pub fn projection(&self, width: u32, height: u32, half_extents: DVec3) -> Projection {
        let (right, up, toward) = self.basis();
        let radius = half_extents.length().max(f64::EPSILON);
        let scale = 0.5 * width.min(height) as f64 * FILL * self.zoom / radius;

        Projection {
            right,
            up,
            toward,
            scale,
            center: (width as f64 * 0.5, height as f64 * 0.5),
        }
    }
}

/// Projected point in pixels; larger depth is closer to the viewer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    pub depth: f64,
}

impl ScreenPoint {
    pub fn xy(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Projection {
    right: DVec3,
    up: DVec3,
    toward: DVec3,
    scale: f64,
    center: (f64, f64),
}

impl Projection {
    /// Projects a point given in normalized box coordinates
    pub fn project(&self, p: DVec3) -> ScreenPoint {
        ScreenPoint {
            x: (self.center.0 + p.dot(self.right) * self.scale) as f32,
            y: (self.center.1 - p.dot(self.up) * self.scale) as f32,
            depth: p.dot(self.toward),
        }
    }

    pub fn toward_viewer(&self) -> DVec3 {
        self.toward
    }

    pub fn center(&self) -> (f32, f32) {
        (self.center.0 as f32, self.center.1 as f32)
    }
}
