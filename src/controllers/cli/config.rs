use std::path::PathBuf;

use clap::ValueEnum;

use crate::core::data::colour::Colour;
use crate::core::fractals::fractal_kinds::FractalKinds;

pub const DEFAULT_WIDTH: u32 = 560;
pub const DEFAULT_HEIGHT: u32 = 420;
const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Ppm,
    Svg,
}

impl OutputFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Ppm => "ppm",
            Self::Svg => "svg",
        }
    }
}

/// Canvas and output settings for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: Colour,
    pub format: OutputFormat,
    /// Falls back to `output/<fractal>.<format>` when unset.
    pub output: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            background: Colour::WHITE,
            format: OutputFormat::default(),
            output: None,
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn output_path(&self, kind: FractalKinds) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(DEFAULT_OUTPUT_DIR).join(format!(
                "{}.{}",
                kind.slug(),
                self.format.extension()
            ))
        })
    }
}
