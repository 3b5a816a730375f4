pub mod draw_sink;
pub mod fractal_algorithm;
