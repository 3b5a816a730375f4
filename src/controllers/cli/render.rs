use std::path::Path;
use std::time::Instant;

use crate::controllers::generator::FractalGenerator;
use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::recursion_depth::DepthRangeError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::presenters::recording::RecordingSink;

/// Draws one fractal into memory and hands it to a file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    sink: RecordingSink,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            sink: RecordingSink::new(),
        }
    }

    pub fn generate(
        &mut self,
        kind: FractalKinds,
        depth: u32,
    ) -> Result<FractalGenerator, DepthRangeError> {
        let start = Instant::now();
        let generator = FractalGenerator::create(kind, depth, &mut self.sink)?;

        log::info!(
            "{kind} at depth {depth}: {} draw commands in {:?}",
            generator.commands_emitted(),
            start.elapsed()
        );

        Ok(generator)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), PresentError> {
        let start = Instant::now();

        self.presenter.present(self.sink.commands(), filepath.as_ref())?;

        log::info!("wrote {} in {:?}", filepath.as_ref().display(), start.elapsed());
        Ok(())
    }
}
