use crate::core::actions::generate_fractal::ports::draw_sink::DrawSink;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::{FractalAlgorithm, Level};
use crate::core::data::colour::Colour;
use crate::core::data::point2d::Point2D;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::sierpinski_carpet::subdivision::{CarpetCell, carpet_grid};

const SEED: CarpetCell = CarpetCell {
    origin: Point2D::new(80.0, 0.0),
    side: 405.0,
};

/// Sierpinski carpet: a blue square with the centre ninth of every cell cut
/// out in white.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SierpinskiCarpet;

impl FractalAlgorithm for SierpinskiCarpet {
    type Shape = CarpetCell;
    type Children = [CarpetCell; 8];

    const KIND: FractalKinds = FractalKinds::SierpinskiCarpet;

    fn seed(&self) -> CarpetCell {
        SEED
    }

    fn draw_seed<S: DrawSink + ?Sized>(&self, seed: CarpetCell, sink: &mut S) {
        sink.draw_polygon(&seed.vertices(), Colour::BLUE);
    }

    fn draw_level<S: DrawSink + ?Sized>(
        &self,
        cell: CarpetCell,
        _: Level,
        sink: &mut S,
    ) -> [CarpetCell; 8] {
        let grid = carpet_grid(cell);

        sink.draw_polygon(&grid.centre().vertices(), Colour::WHITE);

        grid.children()
    }
}
