pub mod cli;
pub mod config;
pub mod depth_input;
pub mod render;
