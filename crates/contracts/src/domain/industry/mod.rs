pub mod aggregate;

pub use aggregate::{IndustriesData, Industry, Solution};
