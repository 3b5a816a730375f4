pub mod rasterize_commands;
