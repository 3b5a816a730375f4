use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use crate::controllers::cli::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, OutputFormat, RenderConfig};
use crate::controllers::cli::depth_input::{DepthInputError, parse_depth_input};
use crate::controllers::cli::render::RenderController;
use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::recursion_depth::DepthRangeError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::presenters::file::ppm::PpmFilePresenter;
use crate::presenters::file::svg::SvgFilePresenter;

const DEPTH_HELP: &str = "\
Depth ranges:
  koch      1-7
  carpet    1-5
  triangle  1-8";

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    DepthInput(#[from] DepthInputError),
    #[error("no depth given")]
    MissingDepth,
    #[error(transparent)]
    DepthRange(#[from] DepthRangeError),
    #[error(transparent)]
    Canvas(#[from] PixelRectError),
    #[error("could not write output: {0}")]
    Present(#[from] PresentError),
}

/// Draw a Koch curve, Sierpinski carpet or Sierpinski triangle to a file.
#[derive(Debug, Parser)]
#[command(name = "recursive_fractals", version, after_help = DEPTH_HELP)]
pub struct Cli {
    /// Fractal to draw: koch, carpet or triangle
    pub kind: FractalKinds,

    /// Recursion depth, a single digit
    #[arg(allow_hyphen_values = true)]
    pub depth: String,

    /// Output file, defaults to output/<kind>.<format>
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ppm)]
    pub format: OutputFormat,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,
}

impl Cli {
    #[must_use]
    pub fn config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            format: self.format,
            output: self.output.clone(),
            ..RenderConfig::default()
        }
    }
}

/// Runs one request and returns the path written.
pub fn run(cli: &Cli) -> Result<PathBuf, CliError> {
    let depth = parse_depth_input(cli.depth.trim())?.ok_or(CliError::MissingDepth)?;
    let config = cli.config();
    let pixel_rect = PixelRect::new(config.width, config.height)?;
    let path = config.output_path(cli.kind);

    match config.format {
        OutputFormat::Ppm => render(
            PpmFilePresenter::new(pixel_rect, config.background),
            cli.kind,
            depth,
            &path,
        )?,
        OutputFormat::Svg => render(
            SvgFilePresenter::new(pixel_rect, config.background),
            cli.kind,
            depth,
            &path,
        )?,
    }

    Ok(path)
}

pub fn run_from_env() -> Result<PathBuf, CliError> {
    run(&Cli::parse())
}

fn render<P: FilePresenterPort>(
    presenter: P,
    kind: FractalKinds,
    depth: u32,
    path: &Path,
) -> Result<(), CliError> {
    let mut controller = RenderController::new(presenter);
    controller.generate(kind, depth)?;
    controller.write(path)?;

    Ok(())
}
