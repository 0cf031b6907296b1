//! Command implementations for temp-rom.

pub mod generate;

pub use generate::{generate_roms, GenerateCommand, GenerateConfig, GenerateStats};
