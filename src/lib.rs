// src/lib.rs
pub mod cli;
pub mod error;
pub mod fields;
pub mod processing;
pub mod raster;
pub mod service;
pub mod synth;

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
