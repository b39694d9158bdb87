use glam::DVec3;

use super::color::Color;
use super::view::View;

/// Relative margin added by [`Axes3D::autoscale`]
const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub const fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Fill and outline of a polygon collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolyStyle {
    pub face_color: Color,
    pub edge_color: Color,
    pub line_width: u32,
}

impl PolyStyle {
    /// Style with one alpha applied to both face and edge colors
    pub fn new(face_color: Color, edge_color: Color, alpha: f64, line_width: u32) -> Self {
        Self {
            face_color: face_color.with_alpha(alpha),
            edge_color: edge_color.with_alpha(alpha),
            line_width,
        }
    }
}

/// Flat polygons drawn together with one style
#[derive(Debug, Clone, PartialEq)]
pub struct Poly3DCollection {
    faces: Vec<Vec<DVec3>>,
    style: PolyStyle,
}

impl Poly3DCollection {
    pub fn new(faces: Vec<Vec<DVec3>>, style: PolyStyle) -> Self {
        Self { faces, style }
    }

    pub fn faces(&self) -> &[Vec<DVec3>] {
        &self.faces
    }

    pub fn style(&self) -> &PolyStyle {
        &self.style
    }

    /// Component-wise min and max over all vertices
    pub fn bounds(&self) -> Option<(DVec3, DVec3)> {
        let mut vertices = self.faces.iter().flatten();
        let first = *vertices.next()?;
        Some(vertices.fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))))
    }
}

/// 3D axes: the scene that pyramids are drawn into
#[derive(Debug, Clone)]
pub struct Axes3D {
    collections: Vec<Poly3DCollection>,
    limits: [(f64, f64); 3],
    labels: [String; 3],
    box_aspect: DVec3,
    view: View,
}

impl Default for Axes3D {
    fn default() -> Self {
        Self::new()
    }
}

impl Axes3D {
    pub fn new() -> Self {
        Self {
            collections: Vec::new(),
            limits: [(0.0, 1.0); 3],
            labels: Default::default(),
            box_aspect: DVec3::new(4.0, 4.0, 3.0),
            view: View::default(),
        }
    }

    pub fn add_collection3d(&mut self, collection: Poly3DCollection) {
        self.collections.push(collection);
    }

    pub fn collections(&self) -> &[Poly3DCollection] {
        &self.collections
    }

    pub fn set_lim(&mut self, axis: Axis, min: f64, max: f64) {
        self.limits[axis.index()] = (min, max);
    }

    pub fn set_xlim(&mut self, min: f64, max: f64) {
        self.set_lim(Axis::X, min, max);
    }

    pub fn set_ylim(&mut self, min: f64, max: f64) {
        self.set_lim(Axis::Y, min, max);
    }

    pub fn set_zlim(&mut self, min: f64, max: f64) {
        self.set_lim(Axis::Z, min, max);
    }

    pub fn limits(&self, axis: Axis) -> (f64, f64) {
        self.limits[axis.index()]
    }

    pub fn set_label(&mut self, axis: Axis, label: impl Into<String>) {
        self.labels[axis.index()] = label.into();
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.set_label(Axis::X, label);
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.set_label(Axis::Y, label);
    }

    pub fn set_zlabel(&mut self, label: impl Into<String>) {
        self.set_label(Axis::Z, label);
    }

    pub fn label(&self, axis: Axis) -> &str {
        &self.labels[axis.index()]
    }

    /// Relative lengths of the drawn box edges. Non-positive entries are ignored.
    pub fn set_box_aspect(&mut self, aspect: [f64; 3]) {
        let aspect = DVec3::from_array(aspect);
        if aspect.min_element() > 0.0 && aspect.is_finite() {
            self.box_aspect = aspect;
        }
    }

    pub fn box_aspect(&self) -> DVec3 {
        self.box_aspect
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    /// Half lengths of the normalized box; the longest is 0.5
    pub fn half_extents(&self) -> DVec3 {
        self.box_aspect / self.box_aspect.max_element() * 0.5
    }

    /// Maps a data value on `axis` into normalized box coordinates
    pub fn normalize_component(&self, axis: Axis, value: f64) -> f64 {
        let (lo, hi) = self.limits(axis);
        let span = if hi != lo { hi - lo } else { 1.0 };
        let half = self.half_extents()[axis.index()];
        ((value - lo) / span - 0.5) * 2.0 * half
    }

    /// Maps a data point into normalized box coordinates
    pub fn normalize(&self, p: DVec3) -> DVec3 {
        DVec3::new(
            self.normalize_component(Axis::X, p.x),
            self.normalize_component(Axis::Y, p.y),
            self.normalize_component(Axis::Z, p.z),
        )
    }

    /// Fits limits to the data with a small margin. No-op without data.
    pub fn autoscale(&mut self) {
        let bounds = self
            .collections
            .iter()
            .filter_map(Poly3DCollection::bounds)
            .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)));

        let Some((lo, hi)) = bounds else {
            return;
        };

        for axis in Axis::ALL {
            let (min, max) = (lo[axis.index()], hi[axis.index()]);
            let pad = if max > min { (max - min) * AUTOSCALE_MARGIN } else { 0.5 };
            self.set_lim(axis, min - pad, max + pad);
        }
    }
}
