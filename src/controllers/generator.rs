use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::ports::draw_sink::DrawSink;
use crate::core::data::recursion_depth::{DepthRangeError, RecursionDepth};
use crate::core::fractals::fractal::Fractal;
use crate::core::fractals::fractal_kinds::FractalKinds;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    DepthRange(#[from] DepthRangeError),
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
}

/// One completed draw request.
///
/// Construction validates the depth, clears the sink and draws the whole
/// fractal before returning. A rejected depth leaves the sink untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FractalGenerator {
    depth: RecursionDepth,
    commands_emitted: usize,
}

impl FractalGenerator {
    pub fn create<S>(kind: FractalKinds, depth: u32, sink: &mut S) -> Result<Self, DepthRangeError>
    where
        S: DrawSink + ?Sized,
    {
        Self::create_cancelable(kind, depth, sink, &NeverCancel).map_err(|e| match e {
            GenerateError::DepthRange(err) => err,
            GenerateError::Cancelled(_) => {
                // NeverCancel never cancels, so this branch is unreachable
                unreachable!("NeverCancel token should never signal cancellation")
            }
        })
    }

    pub fn create_cancelable<S, C>(
        kind: FractalKinds,
        depth: u32,
        sink: &mut S,
        cancel: &C,
    ) -> Result<Self, GenerateError>
    where
        S: DrawSink + ?Sized,
        C: CancelToken,
    {
        log::debug!("{kind}: validating depth {depth}");

        let depth = RecursionDepth::new(kind, depth).inspect_err(|err| {
            log::debug!("{kind}: rejected, {err}");
        })?;

        log::debug!("{kind}: drawing at depth {}", depth.get());

        let commands_emitted = Fractal::for_kind(kind)
            .draw_cancelable(depth, sink, cancel)
            .inspect_err(|_| log::debug!("{kind}: cancelled"))?;

        log::debug!("{kind}: done, {commands_emitted} draw commands");

        Ok(Self {
            depth,
            commands_emitted,
        })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        self.depth.kind()
    }

    #[must_use]
    pub fn depth(&self) -> RecursionDepth {
        self.depth
    }

    #[must_use]
    pub fn commands_emitted(&self) -> usize {
        self.commands_emitted
    }
}
