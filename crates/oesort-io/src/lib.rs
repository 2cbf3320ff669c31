//! Range reads and writes of dense `f32` files.
//!
//! The on-disk format is headerless: element `k` occupies bytes
//! `[k * 4, k * 4 + 4)`, native endianness. Every sort node opens the file
//! independently and touches only its own element range, so positioned I/O
//! needs no shared cursor and no locking.

use std::fs::{File, OpenOptions};
use std::io;
use std::mem;
use std::os::unix::fs::FileExt;
use std::path::Path;

/// Bytes per stored element.
pub const ELEM_BYTES: usize = mem::size_of::<f32>();

/// A dense float file addressed by element offset.
pub struct SliceFile {
    file: File,
}

impl SliceFile {
    /// Open an existing file for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self {
            file: File::open(path)?,
        })
    }

    /// Open an existing file for reading and writing.
    pub fn open_rw<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self {
            file: OpenOptions::new().read(true).write(true).open(path)?,
        })
    }

    /// Create (or truncate) a file pre-sized to `total` elements, so that
    /// nodes can write their ranges in any order.
    pub fn create<P: AsRef<Path>>(path: P, total: usize) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.set_len((total * ELEM_BYTES) as u64)?;
        Ok(Self { file })
    }

    /// Number of whole elements in the file. Fails on a length that is not
    /// a multiple of the element size.
    pub fn element_count(&self) -> io::Result<usize> {
        let bytes = self.file.metadata()?.len() as usize;
        if bytes % ELEM_BYTES != 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("file length {} is not a multiple of {}", bytes, ELEM_BYTES),
            ));
        }
        Ok(bytes / ELEM_BYTES)
    }

    /// Read `len` elements starting at element offset `start`.
    pub fn read_slice(&self, start: usize, len: usize) -> io::Result<Vec<f32>> {
        let mut bytes = vec![0u8; len * ELEM_BYTES];
        self.file
            .read_exact_at(&mut bytes, (start * ELEM_BYTES) as u64)?;
        Ok(bytes
            .chunks_exact(ELEM_BYTES)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect())
    }

    /// Write `data` starting at element offset `start`.
    pub fn write_slice(&self, start: usize, data: &[f32]) -> io::Result<()> {
        let mut bytes = Vec::with_capacity(data.len() * ELEM_BYTES);
        for v in data {
            bytes.extend_from_slice(&v.to_ne_bytes());
        }
        self.file.write_all_at(&bytes, (start * ELEM_BYTES) as u64)
    }
}
