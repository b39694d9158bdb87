use super::color::Color;

/// 2D drawing operations for canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas with color
    Clear(Color),

    /// Draw line from `from` to `to` with a width in pixels
    Line { from: (f32, f32), to: (f32, f32), width: u32, color: Color },

    /// Fill a polygon (even-odd rule)
    Polygon { points: Vec<(f32, f32)>, color: Color },
}

/// Canvas state - pixel buffer with draw operations
#[derive(Clone)]
pub struct Canvas {
    /// RGBA pixel buffer
    pixels: Vec<u8>,
    /// Pending draw operations
    operations: Vec<DrawOp>,
    /// Canvas dimensions
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new transparent canvas with dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize) * 4;

        Self {
            pixels: vec![0; size],
            operations: Vec::new(),
            width,
            height,
        }
    }

    /// Add draw operation - functional style
    pub fn draw(mut self, op: DrawOp) -> Self {
        self.operations.push(op);
        self
    }

    /// Add several draw operations in order
    pub fn draw_all(mut self, ops: impl IntoIterator<Item = DrawOp>) -> Self {
        self.operations.extend(ops);
        self
    }

    /// Number of operations waiting for `execute_ops`
    pub fn pending(&self) -> usize {
        self.operations.len()
    }

    /// Execute all pending operations and return new canvas
    pub fn execute_ops(&self) -> Self {
        let mut canvas = Self {
            pixels: self.pixels.clone(),
            operations: Vec::new(),
            width: self.width,
            height: self.height,
        };

        for op in &self.operations {
            canvas.execute_op(op);
        }

        canvas
    }

    /// Execute single draw operation (mutates internal state)
    fn execute_op(&mut self, op: &DrawOp) {
        match op {
            DrawOp::Clear(color) => self.clear(*color),
            DrawOp::Line { from, to, width, color } => self.draw_line(*from, *to, *width, *color),
            DrawOp::Polygon { points, color } => self.fill_polygon(points, *color),
        }
    }

    /// Clear canvas to color (no blending)
    fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Blend color onto a single pixel, ignoring out-of-bounds coordinates
    fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }

        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let dst = Color::rgba(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        );
        let out = color.over(dst);

        self.pixels[idx] = out.r;
        self.pixels[idx + 1] = out.g;
        self.pixels[idx + 2] = out.b;
        self.pixels[idx + 3] = out.a;
    }

    /// Draw line using Bresenham's algorithm, thickened across the minor axis
    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), width: u32, color: Color) {
        if !(from.0.is_finite() && from.1.is_finite() && to.0.is_finite() && to.1.is_finite()) {
            return;
        }

        // Step only the part of the segment within `width` of the canvas
        let margin = width as f64 + 1.0;
        let Some((from, to)) = clip_segment(
            (from.0 as f64, from.1 as f64),
            (to.0 as f64, to.1 as f64),
            (-margin, -margin),
            (self.width as f64 + margin, self.height as f64 + margin),
        ) else {
            return;
        };

        let (x1, y1) = (from.0.round() as i64, from.1.round() as i64);
        let (x2, y2) = (to.0.round() as i64, to.1.round() as i64);

        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let steep = -dy > dx;

        let width = width.max(1) as i64;
        let lo = -(width - 1) / 2;
        let hi = width / 2;

        let (mut x, mut y) = (x1, y1);
        let mut err = dx + dy;

        loop {
            for k in lo..=hi {
                if steep {
                    self.blend_pixel(x + k, y, color);
                } else {
                    self.blend_pixel(x, y + k, color);
                }
            }

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Fill polygon with a scanline pass sampling pixel centers
    fn fill_polygon(&mut self, points: &[(f32, f32)], color: Color) {
        if points.len() < 3 || self.width == 0 || self.height == 0 {
            return;
        }
        if points.iter().any(|p| !p.0.is_finite() || !p.1.is_finite()) {
            return;
        }

        let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let y_start = (min_y.floor() as i64).max(0);
        let y_end = (max_y.ceil() as i64).min(self.height as i64 - 1);

        let mut crossings = Vec::with_capacity(points.len());
        for y in y_start..=y_end {
            let sample_y = y as f32 + 0.5;
            crossings.clear();

            for (i, &(x0, y0)) in points.iter().enumerate() {
                let (x1, y1) = points[(i + 1) % points.len()];
                if (y0 <= sample_y && y1 > sample_y) || (y1 <= sample_y && y0 > sample_y) {
                    let t = (sample_y - y0) / (y1 - y0);
                    crossings.push(x0 + t * (x1 - x0));
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));

            for span in crossings.chunks_exact(2) {
                // Pixel x is covered when its center x + 0.5 lies in [span[0], span[1])
                let x_start = ((span[0] - 0.5).ceil() as i64).max(0);
                let x_end = ((span[1] - 0.5).ceil() as i64 - 1).min(self.width as i64 - 1);
                for x in x_start..=x_end {
                    self.blend_pixel(x, y, color);
                }
            }
        }
    }

    /// Color at (x, y), if in bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
        Some(Color::rgba(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ))
    }

    /// Get pixel buffer
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Liang-Barsky clip of a segment to the box `[min, max]`
fn clip_segment(
    from: (f64, f64),
    to: (f64, f64),
    min: (f64, f64),
    max: (f64, f64),
) -> Option<((f64, f64), (f64, f64))> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let mut t_enter = 0.0f64;
    let mut t_exit = 1.0f64;

    for (p, q) in [
        (-dx, from.0 - min.0),
        (dx, max.0 - from.0),
        (-dy, from.1 - min.1),
        (dy, max.1 - from.1),
    ] {
        if p == 0.0 {
            // Parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }

        let t = q / p;
        if p < 0.0 {
            if t > t_exit {
                return None;
            }
            t_enter = t_enter.max(t);
        } else {
            if t < t_enter {
                return None;
            }
            t_exit = t_exit.min(t);
        }
    }

    Some((
        (from.0 + t_enter * dx, from.1 + t_enter * dy),
        (from.0 + t_exit * dx, from.1 + t_exit * dy),
    ))
}
