//! Golden reference dumps: raw little-endian `u32`, no header, one file per
//! frame and buffer kind.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Frames dumped for the reference scenario.
pub const CHECKPOINT_FRAMES: [u32; 4] = [1, 10, 50, 100];

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BufferKind {
    Chars,
    Attrs,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chars => write!(f, "chars"),
            Self::Attrs => write!(f, "attrs"),
        }
    }
}

/// `frame_001_chars.bin` and friends.
#[must_use]
pub fn file_name(frame: u32, kind: BufferKind) -> String {
    format!("frame_{frame:03}_{kind}.bin")
}

#[must_use]
pub fn path_for(dir: &Path, frame: u32, kind: BufferKind) -> PathBuf {
    dir.join(file_name(frame, kind))
}

#[must_use]
pub fn encode(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// # Errors
/// `InvalidData` when the length is not a multiple of four.
pub fn decode(bytes: &[u8]) -> io::Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} bytes is not a whole number of u32 values", bytes.len()),
        ));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// # Errors
/// Propagates I/O errors.
pub fn write(path: &Path, values: &[u32]) -> io::Result<()> {
    fs::write(path, encode(values))
}

/// # Errors
/// Propagates I/O errors and malformed lengths.
pub fn read(path: &Path) -> io::Result<Vec<u32>> {
    decode(&fs::read(path)?)
}

/// Mismatch summary between an actual and an expected buffer.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Diff {
    pub count: usize,
    /// First few differing indices, with `(actual, expected)`.
    pub first: Vec<(usize, u32, u32)>,
}

impl Diff {
    const SHOWN: usize = 5;

    #[must_use]
    pub fn between(actual: &[u32], expected: &[u32]) -> Self {
        let mut diff = Self::default();
        for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
            if a != e {
                diff.count += 1;
                if diff.first.len() < Self::SHOWN {
                    diff.first.push((i, a, e));
                }
            }
        }
        diff.count += actual.len().abs_diff(expected.len());
        diff
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} diffs", self.count)?;
        for (i, a, e) in &self.first {
            write!(f, "; [{i}]: got {a:#x} want {e:#x}")?;
        }
        Ok(())
    }
}
