pub mod cancellation;
pub mod generate_fractal;
pub mod rasterize;
