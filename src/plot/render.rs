use glam::DVec3;

use super::axes::{Axes3D, Axis};
use super::canvas::{Canvas, DrawOp};
use super::color::Color;
use super::font;
use super::ticks::{format_tick, ticks};
use super::view::{Projection, ScreenPoint};

const TICK_LENGTH: f32 = 5.0;
const TICK_LABEL_OFFSET: f32 = 16.0;
const TICK_LABEL_HEIGHT: f32 = 9.0;
const AXIS_LABEL_OFFSET: f32 = 38.0;
const AXIS_LABEL_HEIGHT: f32 = 12.0;

/// Rasterizes the axes and everything added to them
pub fn render(ax: &Axes3D, width: u32, height: u32) -> Canvas {
    let projection = ax.view().projection(width, height, ax.half_extents());

    let mut ops = vec![DrawOp::Clear(Color::WHITE)];
    draw_panes(ax, &projection, &mut ops);
    draw_axis_lines(ax, &projection, &mut ops);
    draw_collections(ax, &projection, &mut ops);

    Canvas::new(width, height).draw_all(ops).execute_ops()
}

/// Coordinate of the box side facing away from the viewer, per axis
fn back_sides(half: DVec3, toward: DVec3) -> DVec3 {
    DVec3::new(
        if toward.x >= 0.0 { -half.x } else { half.x },
        if toward.y >= 0.0 { -half.y } else { half.y },
        if toward.z >= 0.0 { -half.z } else { half.z },
    )
}

fn with_component(mut p: DVec3, axis: Axis, value: f64) -> DVec3 {
    p[axis.index()] = value;
    p
}

fn other_axes(axis: Axis) -> (Axis, Axis) {
    match axis {
        Axis::X => (Axis::Y, Axis::Z),
        Axis::Y => (Axis::X, Axis::Z),
        Axis::Z => (Axis::X, Axis::Y),
    }
}

fn line(from: ScreenPoint, to: ScreenPoint, width: u32, color: Color) -> DrawOp {
    DrawOp::Line { from: from.xy(), to: to.xy(), width, color }
}

fn push_text(ops: &mut Vec<DrawOp>, text: &str, center: (f32, f32), height: f32) {
    for (from, to) in font::text_segments(text, center, height) {
        ops.push(DrawOp::Line { from, to, width: 1, color: Color::BLACK });
    }
}

fn draw_panes(ax: &Axes3D, projection: &Projection, ops: &mut Vec<DrawOp>) {
    let half = ax.half_extents();
    let back = back_sides(half, projection.toward_viewer());

    for axis in Axis::ALL {
        let (a, b) = other_axes(axis);
        let plane = with_component(DVec3::ZERO, axis, back[axis.index()]);
        let corner = |sa: f64, sb: f64| {
            let p = with_component(plane, a, sa * half[a.index()]);
            projection.project(with_component(p, b, sb * half[b.index()]))
        };

        let corners = [corner(-1.0, -1.0), corner(1.0, -1.0), corner(1.0, 1.0), corner(-1.0, 1.0)];
        ops.push(DrawOp::Polygon {
            points: corners.iter().map(ScreenPoint::xy).collect(),
            color: Color::PANE,
        });

        // Grid lines on this pane run along `b` at ticks of `a`, and vice versa
        for (along, across) in [(a, b), (b, a)] {
            let (min, max) = ax.limits(across);
            for value in ticks(min, max).0 {
                let n = ax.normalize_component(across, value);
                let p = with_component(plane, across, n);
                let start = with_component(p, along, -half[along.index()]);
                let end = with_component(p, along, half[along.index()]);
                ops.push(line(projection.project(start), projection.project(end), 1, Color::GRID));
            }
        }
    }
}

/// Edge of the box that carries the ticks and label of `axis`
fn axis_edge(axis: Axis, back: DVec3) -> DVec3 {
    match axis {
        Axis::X => DVec3::new(0.0, -back.y, back.z),
        Axis::Y => DVec3::new(-back.x, 0.0, back.z),
        Axis::Z => DVec3::new(back.x, -back.y, 0.0),
    }
}

fn draw_axis_lines(ax: &Axes3D, projection: &Projection, ops: &mut Vec<DrawOp>) {
    let half = ax.half_extents();
    let back = back_sides(half, projection.toward_viewer());
    let (cx, cy) = projection.center();

    for axis in Axis::ALL {
        let edge = axis_edge(axis, back);
        let h = half[axis.index()];
        let start = projection.project(with_component(edge, axis, -h));
        let end = projection.project(with_component(edge, axis, h));
        ops.push(line(start, end, 1, Color::BLACK));

        // Labels are pushed away from the box center
        let mid = ((start.x + end.x) * 0.5, (start.y + end.y) * 0.5);
        let (dx, dy) = (mid.0 - cx, mid.1 - cy);
        let len = (dx * dx + dy * dy).sqrt();
        let dir = if len > f32::EPSILON { (dx / len, dy / len) } else { (0.0, 1.0) };
        let offset = |p: (f32, f32), d: f32| (p.0 + dir.0 * d, p.1 + dir.1 * d);

        let (min, max) = ax.limits(axis);
        let (values, step) = ticks(min, max);
        for value in values {
            let n = ax.normalize_component(axis, value);
            let p = projection.project(with_component(edge, axis, n)).xy();
            ops.push(DrawOp::Line { from: p, to: offset(p, TICK_LENGTH), width: 1, color: Color::BLACK });
            push_text(ops, &format_tick(value, step), offset(p, TICK_LABEL_OFFSET), TICK_LABEL_HEIGHT);
        }

        let label = ax.label(axis);
        if !label.is_empty() {
            push_text(ops, label, offset(mid, AXIS_LABEL_OFFSET), AXIS_LABEL_HEIGHT);
        }
    }
}

/// Painter's algorithm over every face of every collection
fn draw_collections(ax: &Axes3D, projection: &Projection, ops: &mut Vec<DrawOp>) {
    let mut faces = Vec::new();
    for collection in ax.collections() {
        let style = collection.style();
        for face in collection.faces() {
            if face.is_empty() {
                continue;
            }
            let projected: Vec<ScreenPoint> = face.iter().map(|&v| projection.project(ax.normalize(v))).collect();
            let depth = projected.iter().map(|p| p.depth).sum::<f64>() / projected.len() as f64;
            faces.push((depth, projected, style));
        }
    }

    faces.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (_, projected, style) in faces {
        ops.push(DrawOp::Polygon {
            points: projected.iter().map(ScreenPoint::xy).collect(),
            color: style.face_color,
        });
        for (i, &from) in projected.iter().enumerate() {
            let to = projected[(i + 1) % projected.len()];
            ops.push(line(from, to, style.line_width, style.edge_color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{Poly3DCollection, PolyStyle};

    fn count_color(canvas: &Canvas, color: Color) -> usize {
        canvas
            .pixels()
            .chunks_exact(4)
            .filter(|px| **px == [color.r, color.g, color.b, color.a])
            .count()
    }

    #[test]
    fn test_back_sides_default_view() {
        let toward = crate::plot::View::default().eye_direction();
        let back = back_sides(DVec3::splat(0.5), toward);
        assert_eq!(back, DVec3::new(-0.5, 0.5, -0.5));
    }

    #[test]
    fn test_empty_axes_render() {
        let canvas = render(&Axes3D::new(), 200, 150);
        assert_eq!(canvas.dimensions(), (200, 150));
        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
        assert!(count_color(&canvas, Color::PANE) > 0);
        assert!(count_color(&canvas, Color::BLACK) > 0);
    }

    #[test]
    fn test_opaque_face_is_drawn() {
        let red = Color::rgb(255, 0, 0);
        let mut ax = Axes3D::new();
        ax.set_box_aspect([1.0, 1.0, 1.0]);
        ax.add_collection3d(Poly3DCollection::new(
            vec![vec![
                DVec3::new(0.2, 0.2, 0.5),
                DVec3::new(0.8, 0.2, 0.5),
                DVec3::new(0.8, 0.8, 0.5),
                DVec3::new(0.2, 0.8, 0.5),
            ]],
            PolyStyle::new(red, red, 1.0, 1),
        ));

        let canvas = render(&ax, 300, 300);
        assert!(count_color(&canvas, red) > 100);
        // Box center (0.5, 0.5, 0.5) lies inside the face
        assert_eq!(canvas.pixel(150, 150), Some(red));
    }

    #[test]
    fn test_nearer_face_wins() {
        let red = Color::rgb(255, 0, 0);
        let blue = Color::rgb(0, 0, 255);
        let square = |z: f64| {
            vec![
                DVec3::new(0.3, 0.3, z),
                DVec3::new(0.7, 0.3, z),
                DVec3::new(0.7, 0.7, z),
                DVec3::new(0.3, 0.7, z),
            ]
        };

        let near = Poly3DCollection::new(vec![square(0.9)], PolyStyle::new(red, red, 1.0, 1));
        let far = Poly3DCollection::new(vec![square(0.1)], PolyStyle::new(blue, blue, 1.0, 1));

        for order in [[&near, &far], [&far, &near]] {
            let mut ax = Axes3D::new();
            ax.set_box_aspect([1.0, 1.0, 1.0]);
            *ax.view_mut() = crate::plot::View::new(-90.0, 90.0);
            for collection in order {
                ax.add_collection3d(collection.clone());
            }

            let canvas = render(&ax, 200, 200);
            assert_eq!(canvas.pixel(100, 100), Some(red));
        }
    }
}
