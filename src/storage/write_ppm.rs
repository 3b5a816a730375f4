use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::create_file;

pub fn encode_ppm<W: Write>(buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width height max_colour
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;

    Ok(())
}

pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let mut writer = BufWriter::new(create_file(filepath.as_ref())?);

    encode_ppm(buffer, &mut writer)?;
    writer.flush()
}
