use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal_cancelable;
use crate::core::actions::generate_fractal::ports::draw_sink::DrawSink;
use crate::core::data::recursion_depth::RecursionDepth;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::koch_curve::algorithm::KochCurve;
use crate::core::fractals::sierpinski_carpet::algorithm::SierpinskiCarpet;
use crate::core::fractals::sierpinski_triangle::algorithm::SierpinskiTriangle;

/// The closed set of fractals, dispatched onto the shared recursion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Fractal {
    KochCurve(KochCurve),
    SierpinskiCarpet(SierpinskiCarpet),
    SierpinskiTriangle(SierpinskiTriangle),
}

impl Fractal {
    #[must_use]
    pub fn for_kind(kind: FractalKinds) -> Self {
        match kind {
            FractalKinds::KochCurve => Self::KochCurve(KochCurve),
            FractalKinds::SierpinskiCarpet => Self::SierpinskiCarpet(SierpinskiCarpet),
            FractalKinds::SierpinskiTriangle => Self::SierpinskiTriangle(SierpinskiTriangle),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::KochCurve(_) => FractalKinds::KochCurve,
            Self::SierpinskiCarpet(_) => FractalKinds::SierpinskiCarpet,
            Self::SierpinskiTriangle(_) => FractalKinds::SierpinskiTriangle,
        }
    }

    /// Clears `sink` and draws this fractal at `depth`, returning the number
    /// of draw commands issued.
    pub fn draw_cancelable<S, C>(
        &self,
        depth: RecursionDepth,
        sink: &mut S,
        cancel: &C,
    ) -> Result<usize, Cancelled>
    where
        S: DrawSink + ?Sized,
        C: CancelToken,
    {
        match self {
            Self::KochCurve(algorithm) => {
                generate_fractal_cancelable(algorithm, depth, sink, cancel)
            }
            Self::SierpinskiCarpet(algorithm) => {
                generate_fractal_cancelable(algorithm, depth, sink, cancel)
            }
            Self::SierpinskiTriangle(algorithm) => {
                generate_fractal_cancelable(algorithm, depth, sink, cancel)
            }
        }
    }
}
