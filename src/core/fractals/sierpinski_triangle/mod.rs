pub mod algorithm;
pub mod subdivision;
