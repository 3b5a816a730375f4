pub mod fractal;
pub mod fractal_kinds;
pub mod koch_curve;
pub mod sierpinski_carpet;
pub mod sierpinski_triangle;
