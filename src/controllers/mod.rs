pub mod cli;
pub mod generator;
pub mod ports;
