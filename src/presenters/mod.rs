pub mod file;
pub mod recording;
