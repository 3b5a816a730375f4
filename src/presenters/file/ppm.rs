use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::rasterize::rasterize_commands::rasterize_commands;
use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::pixel_rect::PixelRect;
use crate::storage::write_ppm::write_ppm;

/// Rasterizes the recorded commands and saves them as a binary PPM.
pub struct PpmFilePresenter {
    pixel_rect: PixelRect,
    background: Colour,
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(
        &self,
        commands: &[DrawCommand],
        filepath: impl AsRef<Path>,
    ) -> Result<(), PresentError> {
        let buffer = rasterize_commands(commands, self.pixel_rect, self.background)?;

        write_ppm(&buffer, filepath)?;

        Ok(())
    }
}

impl PpmFilePresenter {
    pub fn new(pixel_rect: PixelRect, background: Colour) -> Self {
        Self {
            pixel_rect,
            background,
        }
    }
}
