use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::data::colour::Colour;
use crate::core::data::draw_command::DrawCommand;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point2d::Point2D;

/// Error type for cancelable rasterization.
#[derive(Debug, Error)]
pub enum RasterizeError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// A command reduced to a filled outline.
#[derive(Debug)]
struct FillArea {
    outline: Vec<Point2D>,
    fill: Colour,
    min_y: f64,
    max_y: f64,
}

impl FillArea {
    fn from_command(command: &DrawCommand) -> Option<Self> {
        let (outline, fill) = match command {
            DrawCommand::Segment {
                a,
                b,
                colour,
                thickness,
            } => (stroke_outline(*a, *b, f64::from(*thickness))?, *colour),
            DrawCommand::Polygon { vertices, fill } => (vertices.clone(), *fill),
        };

        let (min_y, max_y) = outline
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });

        Some(Self {
            outline,
            fill,
            min_y,
            max_y,
        })
    }
}

/// The rectangle a butt-capped stroke of `thickness` covers.
fn stroke_outline(a: Point2D, b: Point2D, thickness: f64) -> Option<Vec<Point2D>> {
    let length = a.distance(b);

    if length == 0.0 || thickness <= 0.0 {
        return None;
    }

    let direction = b - a;
    let offset = Point2D::new(-direction.y, direction.x) * (thickness / 2.0 / length);

    Some(vec![a + offset, b + offset, b - offset, a - offset])
}

/// Paints one pixel row: background first, then every area in order.
///
/// A pixel is covered when its centre lies inside the outline under the
/// even-odd rule, with left and top edges inclusive.
fn fill_row(
    row: &mut [u8],
    y: usize,
    areas: &[FillArea],
    background: Colour,
    crossings: &mut Vec<f64>,
) {
    let width = row.len() / 3;
    let centre_y = y as f64 + 0.5;

    for pixel in row.chunks_exact_mut(3) {
        pixel.copy_from_slice(&[background.r, background.g, background.b]);
    }

    for area in areas {
        if centre_y < area.min_y || centre_y >= area.max_y {
            continue;
        }

        crossings.clear();
        let outline = &area.outline;

        for (i, &a) in outline.iter().enumerate() {
            let b = outline[(i + 1) % outline.len()];

            if (a.y <= centre_y) != (b.y <= centre_y) {
                crossings.push(a.x + (centre_y - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }

        crossings.sort_by(f64::total_cmp);

        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil().max(0.0) as usize;
            let end = ((span[1] - 0.5).ceil().max(0.0) as usize).min(width);

            for x in start..end {
                row[x * 3..x * 3 + 3].copy_from_slice(&[area.fill.r, area.fill.g, area.fill.b]);
            }
        }
    }
}

fn fill_areas(commands: &[DrawCommand]) -> Vec<FillArea> {
    commands.iter().filter_map(FillArea::from_command).collect()
}

/// Rasterizes `commands` in order onto a `background`-filled canvas.
///
/// For cancel-aware rasterization, use [`rasterize_commands_cancelable`].
pub fn rasterize_commands(
    commands: &[DrawCommand],
    pixel_rect: PixelRect,
    background: Colour,
) -> Result<PixelBuffer, PixelBufferError> {
    let result = rasterize_commands_cancelable(commands, pixel_rect, background, &NeverCancel);

    result.map_err(|e| match e {
        RasterizeError::PixelBuffer(err) => err,
        RasterizeError::Cancelled(_) => {
            // NeverCancel never cancels, so this branch is unreachable
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Rasterizes rows in parallel, checking `cancel` at the start of each row.
///
/// Every row replays the full command list, so the image is identical to a
/// sequential painter's-order replay.
pub fn rasterize_commands_cancelable<C: CancelToken>(
    commands: &[DrawCommand],
    pixel_rect: PixelRect,
    background: Colour,
    cancel: &C,
) -> Result<PixelBuffer, RasterizeError> {
    let areas = fill_areas(commands);
    let row_bytes = pixel_rect.width() as usize * 3;
    let mut buffer: PixelBufferData = vec![0; row_bytes * pixel_rect.height() as usize];

    buffer
        .par_chunks_mut(row_bytes)
        .enumerate()
        .try_for_each_init(Vec::new, |crossings, (y, row)| {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            fill_row(row, y, &areas, background, crossings);
            Ok(())
        })?;

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}
