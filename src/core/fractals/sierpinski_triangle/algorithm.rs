use crate::core::actions::generate_fractal::ports::draw_sink::DrawSink;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::{FractalAlgorithm, Level};
use crate::core::data::colour::Colour;
use crate::core::data::point2d::Point2D;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::sierpinski_triangle::subdivision::{
    TriangleVertices, triangle_midpoints,
};

const SEED: TriangleVertices = TriangleVertices {
    left: Point2D::new(275.0, 5.0),
    right: Point2D::new(50.0, 400.0),
    upper: Point2D::new(500.0, 400.0),
};

#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SierpinskiTriangle;

impl FractalAlgorithm for SierpinskiTriangle {
    type Shape = TriangleVertices;
    type Children = [TriangleVertices; 3];

    const KIND: FractalKinds = FractalKinds::SierpinskiTriangle;

    fn seed(&self) -> TriangleVertices {
        SEED
    }

    fn draw_seed<S: DrawSink + ?Sized>(&self, seed: TriangleVertices, sink: &mut S) {
        sink.draw_polygon(&seed.to_array(), Colour::BLUE);
    }

    fn draw_level<S: DrawSink + ?Sized>(
        &self,
        triangle: TriangleVertices,
        _: Level,
        sink: &mut S,
    ) -> [TriangleVertices; 3] {
        let midpoints = triangle_midpoints(triangle);

        sink.draw_polygon(&midpoints.centre(), Colour::WHITE);

        midpoints.children(triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
    use crate::core::data::draw_command::DrawCommand;
    use crate::core::data::recursion_depth::RecursionDepth;
    use crate::presenters::recording::RecordingSink;
    use pretty_assertions::assert_eq;

    fn draw(depth: u32) -> RecordingSink {
        let mut sink = RecordingSink::new();
        let depth = RecursionDepth::new(FractalKinds::SierpinskiTriangle, depth).unwrap();

        generate_fractal(&SierpinskiTriangle, depth, &mut sink);

        sink
    }

    fn triangle(points: [(f64, f64); 3], fill: Colour) -> DrawCommand {
        DrawCommand::Polygon {
            vertices: points.iter().map(|&(x, y)| Point2D::new(x, y)).collect(),
            fill,
        }
    }

    #[test]
    fn test_depth_one_draws_seed_then_centre() {
        let sink = draw(1);

        assert_eq!(
            sink.commands(),
            &[
                triangle([(275.0, 5.0), (50.0, 400.0), (500.0, 400.0)], Colour::BLUE),
                triangle([(387.5, 202.5), (275.0, 400.0), (162.5, 202.5)], Colour::WHITE),
            ]
        );
    }

    #[test]
    fn test_depth_two_recurses_upper_then_left_then_right() {
        let sink = draw(2);

        assert_eq!(
            &sink.commands()[2..],
            &[
                // (U, m_lu, m_ru) = (500,400), (387.5,202.5), (275,400)
                triangle([(387.5, 400.0), (331.25, 301.25), (443.75, 301.25)], Colour::WHITE),
                // (m_lu, L, m_lr) = (387.5,202.5), (275,5), (162.5,202.5)
                triangle([(275.0, 202.5), (218.75, 103.75), (331.25, 103.75)], Colour::WHITE),
                // (m_ru, m_lr, R) = (275,400), (162.5,202.5), (50,400)
                triangle([(162.5, 400.0), (106.25, 301.25), (218.75, 301.25)], Colour::WHITE),
            ]
        );
    }

    #[test]
    fn test_triangle_count_matches_closed_form() {
        for depth in 1..=3u32 {
            let cut_triangles = (3_usize.pow(depth) - 1) / 2;

            assert_eq!(draw(depth).commands().len(), 1 + cut_triangles);
        }
    }

    #[test]
    fn test_max_depth_triangle_count() {
        assert_eq!(draw(8).commands().len(), 1 + 3280);
    }

    #[test]
    fn test_runs_are_deterministic() {
        assert_eq!(draw(5).commands(), draw(5).commands());
    }
}
