//! Buffered ROM image output.
//!
//! Each destination is held as a [`RomFile`]. Opening one never changes its
//! contents; the file is only truncated when [`RomFile::fill`] starts
//! writing. Both destinations are opened before either is filled, so a run
//! that cannot open the second one closes the first with its old contents
//! intact. Existing files are written in place, which keeps symlinks, hard
//! links, ownership and mode.

use crate::pattern::RomPattern;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Seek, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Buffer size for image output (one full image fits).
const DEFAULT_BUFFER_SIZE: usize = 32 * 1024;

/// Errors that can occur while producing ROM images.
#[derive(Error, Debug)]
pub enum RomError {
    #[error("Unable to open output file {}: {source}", path.display())]
    DestinationOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to write output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RomError {
    /// Destination the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::DestinationOpen { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, RomError>;

/// Byte-pattern writer over any output.
pub struct RomWriter<W: Write> {
    writer: BufWriter<W>,
    written: usize,
}

impl<W: Write> RomWriter<W> {
    /// Create a new RomWriter with the default buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, output)
    }

    /// Create a new RomWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            written: 0,
        }
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.writer.write_all(&[byte])?;
        self.written += 1;
        Ok(())
    }

    /// Write addresses `0..len` of `pattern`.
    pub fn write_pattern(&mut self, pattern: RomPattern, len: usize) -> io::Result<()> {
        for byte in pattern.bytes(len) {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Bytes written so far.
    pub fn bytes_written(&self) -> usize {
        self.written
    }

    /// Flush buffered bytes to the underlying output.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Flush and return the underlying output.
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

/// An open output destination, closed when dropped.
#[derive(Debug)]
pub struct RomFile {
    path: PathBuf,
    file: File,
}

impl RomFile {
    /// Open `path` for writing, creating it if missing.
    ///
    /// Fails with [`RomError::DestinationOpen`] if the file cannot be opened
    /// for writing. Existing contents are left alone until [`RomFile::fill`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| RomError::DestinationOpen {
                path: path.clone(),
                source,
            })?;

        Ok(Self { path, file })
    }

    /// Destination path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file contents with `len` bytes of `pattern`.
    pub fn fill(&mut self, pattern: RomPattern, len: usize) -> Result<usize> {
        let write_err = |source| RomError::Write {
            path: self.path.clone(),
            source,
        };

        self.file.set_len(0).map_err(write_err)?;
        self.file.rewind().map_err(write_err)?;

        let mut writer = RomWriter::new(&mut self.file);
        writer.write_pattern(pattern, len).map_err(write_err)?;
        let written = writer.bytes_written();
        let file: &mut File = writer.into_inner().map_err(write_err)?;
        file.sync_all().map_err(write_err)?;

        Ok(written)
    }
}
