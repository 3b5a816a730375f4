use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_LEVELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_fractal::ports::draw_sink::DrawSink;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::{FractalAlgorithm, Level};
use crate::core::data::colour::Colour;
use crate::core::data::point2d::Point2D;
use crate::core::data::recursion_depth::RecursionDepth;

/// Forwards to the wrapped sink while counting draw commands.
struct CountingSink<'a, S: DrawSink + ?Sized> {
    inner: &'a mut S,
    commands: usize,
}

impl<S: DrawSink + ?Sized> DrawSink for CountingSink<'_, S> {
    fn clear(&mut self) {
        self.inner.clear();
    }

    fn draw_segment(&mut self, a: Point2D, b: Point2D, colour: Colour, thickness: u32) {
        self.commands += 1;
        self.inner.draw_segment(a, b, colour, thickness);
    }

    fn draw_polygon(&mut self, vertices: &[Point2D], fill: Colour) {
        self.commands += 1;
        self.inner.draw_polygon(vertices, fill);
    }
}

/// Clears `sink` and draws the complete fractal at `depth` onto it.
///
/// Returns the number of draw commands issued. For cancel-aware generation,
/// use [`generate_fractal_cancelable`].
pub fn generate_fractal<Alg, S>(algorithm: &Alg, depth: RecursionDepth, sink: &mut S) -> usize
where
    Alg: FractalAlgorithm,
    S: DrawSink + ?Sized,
{
    generate_fractal_cancelable(algorithm, depth, sink, &NeverCancel).unwrap_or_else(|_| {
        // NeverCancel never cancels, so this branch is unreachable
        unreachable!("NeverCancel token should never signal cancellation")
    })
}

/// Like [`generate_fractal`], but checks `cancel` before the first level and
/// every [`CANCEL_CHECK_INTERVAL_LEVELS`] levels after that.
///
/// On cancellation the sink keeps whatever was drawn so far.
pub fn generate_fractal_cancelable<Alg, S, C>(
    algorithm: &Alg,
    depth: RecursionDepth,
    sink: &mut S,
    cancel: &C,
) -> Result<usize, Cancelled>
where
    Alg: FractalAlgorithm,
    S: DrawSink + ?Sized,
    C: CancelToken,
{
    debug_assert_eq!(depth.kind(), Alg::KIND, "depth validated for another fractal");

    generate_fractal_from_seed(algorithm, algorithm.seed(), depth.get(), sink, cancel)
}

/// The shared recursion, starting from an explicit seed shape.
pub(crate) fn generate_fractal_from_seed<Alg, S, C>(
    algorithm: &Alg,
    seed: Alg::Shape,
    depth: u32,
    sink: &mut S,
    cancel: &C,
) -> Result<usize, Cancelled>
where
    Alg: FractalAlgorithm,
    S: DrawSink + ?Sized,
    C: CancelToken,
{
    let mut sink = CountingSink {
        inner: sink,
        commands: 0,
    };
    let mut levels_visited = 0;

    log::trace!("{}: seed {:?}, depth {}", Alg::KIND, seed, depth);

    sink.clear();
    algorithm.draw_seed(seed, &mut sink);
    descend(
        algorithm,
        seed,
        Level {
            remaining: depth,
            top: true,
        },
        &mut sink,
        cancel,
        &mut levels_visited,
    )?;

    log::trace!(
        "{}: {} levels, {} commands",
        Alg::KIND,
        levels_visited,
        sink.commands
    );

    Ok(sink.commands)
}

fn descend<Alg, S, C>(
    algorithm: &Alg,
    shape: Alg::Shape,
    level: Level,
    sink: &mut S,
    cancel: &C,
    levels_visited: &mut usize,
) -> Result<(), Cancelled>
where
    Alg: FractalAlgorithm,
    S: DrawSink + ?Sized,
    C: CancelToken,
{
    if level.remaining == 0 {
        return Ok(());
    }

    if *levels_visited % CANCEL_CHECK_INTERVAL_LEVELS == 0 && cancel.is_cancelled() {
        return Err(Cancelled);
    }
    *levels_visited += 1;

    let children = algorithm.draw_level(shape, level, sink);

    // Children at depth zero would draw nothing.
    if level.remaining == 1 {
        return Ok(());
    }

    let next = Level {
        remaining: level.remaining - 1,
        top: false,
    };

    for child in children {
        descend(algorithm, child, next, sink, cancel, levels_visited)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::draw_command::DrawCommand;
    use crate::core::fractals::fractal_kinds::FractalKinds;
    use crate::presenters::recording::RecordingSink;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Draws one unit segment per level and splits into two children.
    #[derive(Debug)]
    struct StubBinaryAlgorithm {}

    impl FractalAlgorithm for StubBinaryAlgorithm {
        type Shape = f64;
        type Children = [f64; 2];

        const KIND: FractalKinds = FractalKinds::KochCurve;

        fn seed(&self) -> f64 {
            0.0
        }

        fn draw_seed<S: DrawSink + ?Sized>(&self, _: f64, sink: &mut S) {
            sink.draw_polygon(
                &[
                    Point2D::new(0.0, 0.0),
                    Point2D::new(1.0, 0.0),
                    Point2D::new(0.0, 1.0),
                ],
                Colour::BLUE,
            );
        }

        fn draw_level<S: DrawSink + ?Sized>(
            &self,
            shape: f64,
            level: Level,
            sink: &mut S,
        ) -> [f64; 2] {
            let thickness = if level.top { 2 } else { 1 };
            sink.draw_segment(
                Point2D::new(shape, 0.0),
                Point2D::new(shape, f64::from(level.remaining)),
                Colour::BLACK,
                thickness,
            );
            [shape * 2.0, shape * 2.0 + 1.0]
        }
    }

    #[test]
    fn test_clears_before_drawing() {
        let mut sink = RecordingSink::new();
        sink.draw_segment(Point2D::new(9.0, 9.0), Point2D::new(8.0, 8.0), Colour::WHITE, 1);

        generate_fractal_from_seed(&StubBinaryAlgorithm {}, 0.0, 1, &mut sink, &NeverCancel)
            .unwrap();

        assert_eq!(sink.clear_count(), 1);
        assert_eq!(sink.commands().len(), 2);
        assert!(matches!(sink.commands()[0], DrawCommand::Polygon { .. }));
    }

    #[test]
    fn test_visits_levels_depth_first_in_child_order() {
        let mut sink = RecordingSink::new();

        let commands =
            generate_fractal_from_seed(&StubBinaryAlgorithm {}, 0.0, 3, &mut sink, &NeverCancel)
                .unwrap();

        let xs: Vec<f64> = sink
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Segment { a, .. } => Some(a.x),
                DrawCommand::Polygon { .. } => None,
            })
            .collect();

        // 1 seed + 1 + 2 + 4 levels
        assert_eq!(commands, 8);
        assert_eq!(xs, vec![0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_only_the_first_level_is_top() {
        let mut sink = RecordingSink::new();

        generate_fractal_from_seed(&StubBinaryAlgorithm {}, 0.0, 2, &mut sink, &NeverCancel)
            .unwrap();

        let thicknesses: Vec<u32> = sink
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Segment { thickness, .. } => Some(*thickness),
                DrawCommand::Polygon { .. } => None,
            })
            .collect();

        assert_eq!(thicknesses, vec![2, 1, 1]);
    }

    #[test]
    fn test_depth_zero_draws_only_the_seed() {
        let mut sink = RecordingSink::new();

        let commands =
            generate_fractal_from_seed(&StubBinaryAlgorithm {}, 0.0, 0, &mut sink, &NeverCancel)
                .unwrap();

        assert_eq!(commands, 1);
    }

    #[test]
    fn test_cancelled_before_start_draws_only_the_seed() {
        let mut sink = RecordingSink::new();
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result =
            generate_fractal_from_seed(&StubBinaryAlgorithm {}, 0.0, 5, &mut sink, &cancel_token);

        assert_eq!(result, Err(Cancelled));
        assert_eq!(sink.commands().len(), 1);
    }

    #[test]
    fn test_cancel_token_is_polled_at_the_check_interval() {
        let mut sink = RecordingSink::new();
        let polls = AtomicUsize::new(0);
        let cancel_token = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        // 2^10 - 1 levels
        generate_fractal_from_seed(&StubBinaryAlgorithm {}, 0.0, 10, &mut sink, &cancel_token)
            .unwrap();

        assert_eq!(
            polls.load(Ordering::Relaxed),
            1023_usize.div_ceil(CANCEL_CHECK_INTERVAL_LEVELS)
        );
    }
}
