use crate::core::actions::generate_fractal::ports::draw_sink::DrawSink;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::{FractalAlgorithm, Level};
use crate::core::data::colour::Colour;
use crate::core::data::point2d::Point2D;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::koch_curve::subdivision::{KochSegment, koch_points};

const SEED: KochSegment = KochSegment {
    left: Point2D::new(10.0, 250.0),
    right: Point2D::new(530.0, 250.0),
    divide: Point2D::new(250.0, 640.0),
};

const EDGE_THICKNESS: u32 = 1;
const ERASE_THICKNESS: u32 = 3;

/// Koch curve over a single horizontal edge.
///
/// The top level outlines the whole bump. Every deeper level draws only its
/// two new bump edges and then paints the parent's straight middle third
/// white, so the result depends on later commands covering earlier ones.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct KochCurve;

impl FractalAlgorithm for KochCurve {
    type Shape = KochSegment;
    type Children = [KochSegment; 4];

    const KIND: FractalKinds = FractalKinds::KochCurve;

    fn seed(&self) -> KochSegment {
        SEED
    }

    fn draw_seed<S: DrawSink + ?Sized>(&self, _: KochSegment, _: &mut S) {}

    fn draw_level<S: DrawSink + ?Sized>(
        &self,
        segment: KochSegment,
        level: Level,
        sink: &mut S,
    ) -> [KochSegment; 4] {
        let points = koch_points(segment);

        if level.top {
            sink.draw_segment(segment.left, points.first, Colour::BLACK, EDGE_THICKNESS);
            sink.draw_segment(points.first, points.peak, Colour::BLACK, EDGE_THICKNESS);
            sink.draw_segment(points.second, points.peak, Colour::BLACK, EDGE_THICKNESS);
            sink.draw_segment(segment.right, points.second, Colour::BLACK, EDGE_THICKNESS);
        } else {
            sink.draw_segment(points.first, points.peak, Colour::BLACK, EDGE_THICKNESS);
            sink.draw_segment(points.second, points.peak, Colour::BLACK, EDGE_THICKNESS);
            sink.draw_segment(points.second, points.first, Colour::WHITE, ERASE_THICKNESS);
        }

        points.children(segment)
    }
}
