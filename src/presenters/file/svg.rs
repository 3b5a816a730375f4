use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::pixel_rect::PixelRect;
use crate::storage::write_svg::write_svg;

pub struct SvgFilePresenter {
    pixel_rect: PixelRect,
    background: Colour,
}

impl FilePresenterPort for SvgFilePresenter {
    fn present(
        &self,
        commands: &[DrawCommand],
        filepath: impl AsRef<Path>,
    ) -> Result<(), PresentError> {
        write_svg(commands, self.pixel_rect, self.background, filepath)?;

        Ok(())
    }
}

impl SvgFilePresenter {
    pub fn new(pixel_rect: PixelRect, background: Colour) -> Self {
        Self {
            pixel_rect,
            background,
        }
    }
}
