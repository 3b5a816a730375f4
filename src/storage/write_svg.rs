use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::pixel_rect::PixelRect;
use crate::storage::create_file;

/// Writes `commands` as an SVG document, one element per command in order.
pub fn encode_svg<W: Write>(
    commands: &[DrawCommand],
    pixel_rect: PixelRect,
    background: Colour,
    mut writer: W,
) -> std::io::Result<()> {
    let (width, height) = (pixel_rect.width(), pixel_rect.height());

    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    writeln!(
        writer,
        r#"  <rect width="{width}" height="{height}" fill="{}"/>"#,
        background.to_hex()
    )?;

    for command in commands {
        match command {
            DrawCommand::Segment {
                a,
                b,
                colour,
                thickness,
            } => writeln!(
                writer,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                a.x,
                a.y,
                b.x,
                b.y,
                colour.to_hex(),
                thickness
            )?,
            DrawCommand::Polygon { vertices, fill } => {
                let points = vertices
                    .iter()
                    .map(|p| format!("{},{}", p.x, p.y))
                    .collect::<Vec<_>>()
                    .join(" ");

                writeln!(writer, r#"  <polygon points="{points}" fill="{}"/>"#, fill.to_hex())?
            }
        }
    }

    writeln!(writer, "</svg>")
}

pub fn write_svg(
    commands: &[DrawCommand],
    pixel_rect: PixelRect,
    background: Colour,
    filepath: impl AsRef<Path>,
) -> std::io::Result<()> {
    let mut writer = BufWriter::new(create_file(filepath.as_ref())?);

    encode_svg(commands, pixel_rect, background, &mut writer)?;
    writer.flush()
}
