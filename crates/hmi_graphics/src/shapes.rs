use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use hmi_geometry::{Color, Vec2f};

/// Number of segments used to approximate a circle.
pub const CIRCLE_SEGMENTS: usize = 50;

/// One vertex as uploaded to the GPU: two position floats followed by four
/// color floats.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec2f,
    pub color: Color,
}

impl Vertex {
    pub fn new(position: Vec2f, color: Color) -> Self {
        Self { position, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
    Points,
    Lines,
    LineStrip,
    LineLoop,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

fn circle_point(center: Vec2f, radius: f32, i: usize) -> Vec2f {
    let angle = TAU * i as f32 / CIRCLE_SEGMENTS as f32;
    center + Vec2f::new(angle.sin(), angle.cos()) * radius
}

/// Corners of a filled rectangle, ordered for [`PrimitiveMode::TriangleStrip`]:
/// top-left, bottom-left, top-right, bottom-right.
pub fn rectangle_fill(origin: Vec2f, size: Vec2f, color: Color) -> [Vertex; 4] {
    let (x, y) = (origin.x(), origin.y());
    let (w, h) = (size.width(), size.height());

    [
        Vertex::new(Vec2f::new(x, y), color),
        Vertex::new(Vec2f::new(x, y + h), color),
        Vertex::new(Vec2f::new(x + w, y), color),
        Vertex::new(Vec2f::new(x + w, y + h), color),
    ]
}

/// Corners of a rectangle outline in perimeter order, for
/// [`PrimitiveMode::LineLoop`].
pub fn rectangle_outline(origin: Vec2f, size: Vec2f, color: Color) -> [Vertex; 4] {
    let (x, y) = (origin.x(), origin.y());
    let (w, h) = (size.width(), size.height());

    [
        Vertex::new(Vec2f::new(x, y), color),
        Vertex::new(Vec2f::new(x, y + h), color),
        Vertex::new(Vec2f::new(x + w, y + h), color),
        Vertex::new(Vec2f::new(x + w, y), color),
    ]
}

/// A disc as a [`PrimitiveMode::TriangleFan`]: the center, then the rim with
/// the first rim point repeated at the end to close the fan.
pub fn circle_fill(center: Vec2f, radius: f32, color: Color) -> [Vertex; CIRCLE_SEGMENTS + 2] {
    std::array::from_fn(|i| match i {
        0 => Vertex::new(center, color),
        i => Vertex::new(circle_point(center, radius, i - 1), color),
    })
}

/// A circle rim as a [`PrimitiveMode::LineLoop`].
pub fn circle_outline(center: Vec2f, radius: f32, color: Color) -> [Vertex; CIRCLE_SEGMENTS] {
    std::array::from_fn(|i| Vertex::new(circle_point(center, radius, i), color))
}

pub fn line(start: Vec2f, end: Vec2f, color: Color) -> [Vertex; 2] {
    [Vertex::new(start, color), Vertex::new(end, color)]
}

/// A closed outline through `points`, for [`PrimitiveMode::LineLoop`].
pub fn polygon_outline(points: &[Vec2f], color: Color) -> Vec<Vertex> {
    points.iter().map(|p| Vertex::new(*p, color)).collect()
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use hmi_geometry::color;

    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 6 * 4);

        let vertex = Vertex::new(Vec2f::new(1., 2.), color::RED);
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&vertex));
        assert_eq!(floats, &[1., 2., 1., 0., 0., 1.]);
    }

    #[test]
    fn test_vertex_slice_reads_back_as_vectors() {
        let vertices = line(Vec2f::new(3., 4.), Vec2f::new(5., 6.), color::GREEN);
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        let back: &[Vertex] = bytemuck::cast_slice(bytes);

        assert_eq!(back[1].position, Vec2f::new(5., 6.));
        assert_eq!(back[0].color, color::GREEN);
    }

    #[test]
    fn test_rectangle_fill_order() {
        let v = rectangle_fill(Vec2f::new(10., 20.), Vec2f::new(30., 40.), color::WHITE);
        let positions = v.map(|v| v.position);

        assert_eq!(
            positions,
            [
                Vec2f::new(10., 20.),
                Vec2f::new(10., 60.),
                Vec2f::new(40., 20.),
                Vec2f::new(40., 60.),
            ]
        );
    }

    #[test]
    fn test_rectangle_outline_order() {
        let v = rectangle_outline(Vec2f::new(0., 0.), Vec2f::new(2., 1.), color::WHITE);
        let positions = v.map(|v| v.position);

        assert_eq!(
            positions,
            [
                Vec2f::new(0., 0.),
                Vec2f::new(0., 1.),
                Vec2f::new(2., 1.),
                Vec2f::new(2., 0.),
            ]
        );
    }

    #[test]
    fn test_circle_fill() {
        let center = Vec2f::new(5., -3.);
        let v = circle_fill(center, 2., color::GREEN);

        assert_eq!(v.len(), 52);
        assert_eq!(v[0].position, center);
        for vertex in &v[1..] {
            assert!(approx_eq!(
                f32,
                vertex.position.distance(center),
                2.,
                epsilon = 1e-5
            ));
        }

        // Angle zero points along +Y.
        assert!(approx_eq!(f32, v[1].position[0], 5., epsilon = 1e-5));
        assert!(approx_eq!(f32, v[1].position[1], -1., epsilon = 1e-5));

        assert!(approx_eq!(f32, v[1].position[0], v[51].position[0], epsilon = 1e-5));
        assert!(approx_eq!(f32, v[1].position[1], v[51].position[1], epsilon = 1e-5));
    }

    #[test]
    fn test_circle_outline() {
        let v = circle_outline(Vec2f::new(0., 0.), 10., color::BLUE);

        assert_eq!(v.len(), 50);
        for vertex in &v {
            assert!(approx_eq!(
                f32,
                vertex.position.length(),
                10.,
                epsilon = 1e-4
            ));
            assert_eq!(vertex.color, color::BLUE);
        }
    }

    #[test]
    fn test_polygon_outline_keeps_points() {
        let points = [Vec2f::new(0., 0.), Vec2f::new(1., 0.), Vec2f::new(0., 1.)];
        let v = polygon_outline(&points, color::YELLOW);

        assert_eq!(v.len(), 3);
        assert_eq!(v[2].position, Vec2f::new(0., 1.));
        assert!(polygon_outline(&[], color::YELLOW).is_empty());
    }
}
