//! Fixed layout of the two ROM images.
//!
//! Nothing here is configurable at runtime: the image size and file names
//! match the 32K EEPROMs on the board. The library exposes the destinations
//! as a [`RomPaths`] value so callers are not tied to the working directory.

use std::path::{Path, PathBuf};

/// Bytes per ROM image (32K, half the addressable space).
pub const ROM_SIZE: usize = 32 * 1024;

/// File name of the most significant byte image.
pub const MSB_FILE_NAME: &str = "msb-rom.bin";

/// File name of the least significant byte image.
pub const LSB_FILE_NAME: &str = "lsb-rom.bin";

/// Destinations for the MSB and LSB images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomPaths {
    pub msb: PathBuf,
    pub lsb: PathBuf,
}

impl RomPaths {
    /// Place both images inside `dir` under their fixed names.
    ///
    /// # Example
    ///
    /// ```
    /// use temp_rom::config::RomPaths;
    ///
    /// let paths = RomPaths::in_dir("/tmp/roms");
    /// assert!(paths.msb.ends_with("msb-rom.bin"));
    /// assert!(paths.lsb.ends_with("lsb-rom.bin"));
    /// ```
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            msb: dir.join(MSB_FILE_NAME),
            lsb: dir.join(LSB_FILE_NAME),
        }
    }
}

impl Default for RomPaths {
    /// Both names relative to the current working directory.
    fn default() -> Self {
        Self {
            msb: PathBuf::from(MSB_FILE_NAME),
            lsb: PathBuf::from(LSB_FILE_NAME),
        }
    }
}
