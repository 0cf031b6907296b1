//! temp-rom: deterministic EEPROM images for 16-bit memory bus bring-up.
//!
//! Two EEPROMs side by side, both reading the same address, return one
//! 16-bit word. This library produces known contents for each chip so the
//! bus can be checked before real firmware exists.
//!
//! # Images
//!
//! - **`msb-rom.bin`**: a single set bit sweeping up and down (Knight-Rider)
//! - **`lsb-rom.bin`**: a counter `0x00..=0xff`, wrapping every 256 bytes
//!
//! Both are exactly [`config::ROM_SIZE`] bytes.
//!
//! # Example
//!
//! ```rust,no_run
//! use temp_rom::{config::RomPaths, generate_roms};
//!
//! let stats = generate_roms(RomPaths::default()).unwrap();
//! eprintln!("{}", stats);
//! ```

pub mod commands;
pub mod config;
pub mod pattern;
pub mod writer;

// Re-export commonly used types
pub use commands::{generate_roms, GenerateCommand, GenerateConfig, GenerateStats};
pub use config::{RomPaths, ROM_SIZE};
pub use pattern::{lsb_byte, msb_byte, RomPattern};
pub use writer::{RomError, RomFile, RomWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::commands::{GenerateCommand, GenerateConfig, GenerateStats};
    pub use crate::config::{RomPaths, LSB_FILE_NAME, MSB_FILE_NAME, ROM_SIZE};
    pub use crate::pattern::{lsb_byte, msb_byte, RomPattern};
    pub use crate::writer::RomError;
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_basic_workflow() {
        use crate::prelude::*;

        let dir = tempfile::tempdir().unwrap();
        let paths = RomPaths::in_dir(dir.path());
        GenerateCommand::new(GenerateConfig {
            paths: paths.clone(),
            ..Default::default()
        })
        .run()
        .unwrap();

        let msb = std::fs::read(&paths.msb).unwrap();
        let lsb = std::fs::read(&paths.lsb).unwrap();

        // Reading both chips at one address yields a 16-bit word
        let word = |addr: usize| u16::from_be_bytes([msb[addr], lsb[addr]]);
        assert_eq!(word(0), 0x0100);
        assert_eq!(word(7), 0x8007);
        assert_eq!(word(8), 0x8008);
        assert_eq!(word(ROM_SIZE - 1), 0x01ff);
    }
}
