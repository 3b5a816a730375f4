use crate::core::actions::generate_fractal::ports::draw_sink::DrawSink;
use crate::core::fractals::fractal_kinds::FractalKinds;

/// Where a call sits in the recursion.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Level {
    /// Levels left including this one; never zero when handed to an algorithm.
    pub remaining: u32,
    /// Only the outermost call is the top.
    pub top: bool,
}

/// One fractal's policy for the shared recursive subdivision.
pub trait FractalAlgorithm {
    /// The geometry threaded through the recursion.
    type Shape: Copy + std::fmt::Debug;
    type Children: IntoIterator<Item = Self::Shape>;

    const KIND: FractalKinds;

    fn seed(&self) -> Self::Shape;

    /// Paints the background shape before any recursion.
    fn draw_seed<S: DrawSink + ?Sized>(&self, seed: Self::Shape, sink: &mut S);

    /// Subdivides `shape`, emits this level's commands, and returns the child
    /// shapes in recursion order.
    fn draw_level<S: DrawSink + ?Sized>(
        &self,
        shape: Self::Shape,
        level: Level,
        sink: &mut S,
    ) -> Self::Children;
}
