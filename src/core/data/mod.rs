pub mod colour;
pub mod draw_command;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod point2d;
pub mod recursion_depth;
