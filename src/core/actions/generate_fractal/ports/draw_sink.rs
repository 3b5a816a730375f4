use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::point2d::Point2D;

/// A drawing surface that fractal generation paints onto.
///
/// Implementations must apply commands in call order: later commands are
/// drawn over earlier ones.
pub trait DrawSink {
    /// Removes everything previously drawn.
    fn clear(&mut self);

    fn draw_segment(&mut self, a: Point2D, b: Point2D, colour: Colour, thickness: u32);

    /// `vertices` always holds at least three points.
    fn draw_polygon(&mut self, vertices: &[Point2D], fill: Colour);

    fn draw(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Segment {
                a,
                b,
                colour,
                thickness,
            } => self.draw_segment(a, b, colour, thickness),
            DrawCommand::Polygon { vertices, fill } => self.draw_polygon(&vertices, fill),
        }
    }
}
