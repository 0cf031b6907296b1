//! Generate the MSB and LSB ROM images.
//!
//! Both destinations are opened before a single byte is produced. If either
//! cannot be opened the run fails straight away, and a destination that did
//! open is closed untouched. The images are then written one after the
//! other, each truncating its file first.

use crate::config::{RomPaths, ROM_SIZE};
use crate::pattern::RomPattern;
use crate::writer::{Result, RomFile};
use std::time::Instant;

/// Configuration for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub paths: RomPaths,
    /// Bytes per image.
    pub size: usize,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            paths: RomPaths::default(),
            size: ROM_SIZE,
        }
    }
}

/// Statistics from generate operation.
#[derive(Debug, Default, Clone)]
pub struct GenerateStats {
    pub files: usize,
    pub bytes_per_file: usize,
    pub elapsed_secs: f64,
}

impl std::fmt::Display for GenerateStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files x {} bytes ({:.3}s)",
            self.files, self.bytes_per_file, self.elapsed_secs
        )
    }
}

/// Generate command.
pub struct GenerateCommand {
    config: GenerateConfig,
}

impl GenerateCommand {
    /// Create a new generate command with the given config.
    pub fn new(config: GenerateConfig) -> Self {
        Self { config }
    }

    /// Configuration this command runs with.
    pub fn config(&self) -> &GenerateConfig {
        &self.config
    }

    /// Run the generation.
    pub fn run(&self) -> Result<GenerateStats> {
        let start = Instant::now();
        let size = self.config.size;

        // Open both before generating. `?` drops an already-open MSB file.
        let mut msb = RomFile::open(&self.config.paths.msb)?;
        let mut lsb = RomFile::open(&self.config.paths.lsb)?;

        msb.fill(RomPattern::Msb, size)?;
        lsb.fill(RomPattern::Lsb, size)?;

        Ok(GenerateStats {
            files: 2,
            bytes_per_file: size,
            elapsed_secs: start.elapsed().as_secs_f64(),
        })
    }
}

/// Write both full-size images to `paths`.
pub fn generate_roms(paths: RomPaths) -> Result<GenerateStats> {
    GenerateCommand::new(GenerateConfig {
        paths,
        ..Default::default()
    })
    .run()
}
