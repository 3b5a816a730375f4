use std::path::Path;

use thiserror::Error;

use crate::core::data::draw_command::DrawCommand;
use crate::core::data::pixel_buffer::PixelBufferError;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("rasterization failed: {0}")]
    Rasterize(#[from] PixelBufferError),
}

pub trait FilePresenterPort {
    fn present(
        &self,
        commands: &[DrawCommand],
        filepath: impl AsRef<Path>,
    ) -> Result<(), PresentError>;
}
