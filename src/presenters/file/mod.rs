pub mod ppm;
pub mod svg;
