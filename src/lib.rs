mod controllers;
mod core;
mod presenters;
mod storage;

pub use controllers::cli::cli::{Cli, CliError, run, run_from_env};
pub use controllers::cli::config::{OutputFormat, RenderConfig};
pub use controllers::cli::depth_input::{DepthInputError, parse_depth_input};
pub use controllers::cli::render::RenderController;
pub use controllers::generator::{FractalGenerator, GenerateError};
pub use controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use core::actions::generate_fractal::generate_fractal::{
    generate_fractal, generate_fractal_cancelable,
};
pub use core::actions::generate_fractal::ports::draw_sink::DrawSink;
pub use core::actions::generate_fractal::ports::fractal_algorithm::{FractalAlgorithm, Level};
pub use core::actions::rasterize::rasterize_commands::{
    RasterizeError, rasterize_commands, rasterize_commands_cancelable,
};
pub use core::data::colour::Colour;
pub use core::data::draw_command::DrawCommand;
pub use core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use core::data::pixel_rect::{PixelRect, PixelRectError};
pub use core::data::point::Point;
pub use core::data::point2d::Point2D;
pub use core::data::recursion_depth::{DepthBounds, DepthRangeError, RecursionDepth};
pub use core::fractals::fractal::Fractal;
pub use core::fractals::fractal_kinds::{FractalKinds, UnknownFractalKind};
pub use core::fractals::koch_curve::algorithm::KochCurve;
pub use core::fractals::sierpinski_carpet::algorithm::SierpinskiCarpet;
pub use core::fractals::sierpinski_triangle::algorithm::SierpinskiTriangle;
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::file::svg::SvgFilePresenter;
pub use presenters::recording::RecordingSink;
pub use storage::write_ppm::write_ppm;
pub use storage::write_svg::write_svg;
