use thiserror::Error;

use crate::core::data::point::Point;

/// Largest accepted canvas side, keeping an RGB buffer under 200 MiB.
pub const MAX_SIDE: u32 = 8192;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("canvas size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
    #[error("canvas size {width}x{height} exceeds {max}x{max}")]
    TooLarge { width: u32, height: u32, max: u32 },
}

/// Canvas bounds in whole pixels, anchored at the origin.
///
/// Pixel `(x, y)` covers the unit square `[x, x + 1) x [y, y + 1)` of canvas
/// space, so its centre sits at `(x + 0.5, y + 0.5)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        if width == 0 || height == 0 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        if width > MAX_SIDE || height > MAX_SIDE {
            return Err(PixelRectError::TooLarge {
                width,
                height,
                max: MAX_SIDE,
            });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}
