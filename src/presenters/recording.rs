use crate::core::actions::generate_fractal::ports::draw_sink::DrawSink;
use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::point2d::Point2D;

/// Keeps every draw command in order, for file presenters and tests.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecordingSink {
    commands: Vec<DrawCommand>,
    clear_count: usize,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many times the sink has been cleared.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }
}

impl DrawSink for RecordingSink {
    fn clear(&mut self) {
        self.commands.clear();
        self.clear_count += 1;
    }

    fn draw_segment(&mut self, a: Point2D, b: Point2D, colour: Colour, thickness: u32) {
        self.commands.push(DrawCommand::Segment {
            a,
            b,
            colour,
            thickness,
        });
    }

    fn draw_polygon(&mut self, vertices: &[Point2D], fill: Colour) {
        self.commands.push(DrawCommand::Polygon {
            vertices: vertices.to_vec(),
            fill,
        });
    }

    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_call_order() {
        let mut sink = RecordingSink::new();
        let a = Point2D::new(0.0, 0.0);
        let b = Point2D::new(1.0, 1.0);
        let c = Point2D::new(0.0, 1.0);

        sink.draw_polygon(&[a, b, c], Colour::BLUE);
        sink.draw_segment(a, b, Colour::BLACK, 1);

        assert_eq!(
            sink.commands(),
            &[
                DrawCommand::Polygon {
                    vertices: vec![a, b, c],
                    fill: Colour::BLUE
                },
                DrawCommand::Segment {
                    a,
                    b,
                    colour: Colour::BLACK,
                    thickness: 1
                },
            ]
        );
    }

    #[test]
    fn test_draw_keeps_command_as_is() {
        let mut sink = RecordingSink::new();
        let command = DrawCommand::Segment {
            a: Point2D::new(3.0, 4.0),
            b: Point2D::new(5.0, 6.0),
            colour: Colour::WHITE,
            thickness: 3,
        };

        sink.draw(command.clone());

        assert_eq!(sink.commands(), &[command]);
    }

    #[test]
    fn test_clear_drops_commands_and_counts() {
        let mut sink = RecordingSink::new();
        sink.draw_segment(Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0), Colour::BLACK, 1);

        sink.clear();

        assert!(sink.commands().is_empty());
        assert_eq!(sink.clear_count(), 1);
    }
}
