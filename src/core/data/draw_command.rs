use crate::core::data::colour::Colour;
use crate::core::data::point2d::Point2D;

/// One atomic instruction for a drawing surface.
///
/// Commands are handed to a [`DrawSink`](crate::core::actions::generate_fractal::ports::draw_sink::DrawSink)
/// in the order the fractal produces them; later commands paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Segment {
        a: Point2D,
        b: Point2D,
        colour: Colour,
        thickness: u32,
    },
    Polygon {
        vertices: Vec<Point2D>,
        fill: Colour,
    },
}

impl DrawCommand {
    /// Axis-aligned bounds as `(min, max)` corners, ignoring stroke thickness.
    #[must_use]
    pub fn bounds(&self) -> (Point2D, Point2D) {
        let points: &[Point2D] = match self {
            Self::Segment { a, b, .. } => &[*a, *b],
            Self::Polygon { vertices, .. } => vertices,
        };

        points.iter().fold(
            (
                Point2D::new(f64::INFINITY, f64::INFINITY),
                Point2D::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            ),
            |(min, max), p| {
                (
                    Point2D::new(min.x.min(p.x), min.y.min(p.y)),
                    Point2D::new(max.x.max(p.x), max.y.max(p.y)),
                )
            },
        )
    }
}
