//! Error type for simulation lifecycle and canvas operations.

use std::fmt;

/// Errors raised by [`crate::Fire`].
///
/// All of them are fatal to the call that produced them; the instance is
/// left exactly as it was before the call.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum FireError {
    /// Operation invoked before `init`/`init_seeded`, or after `teardown`.
    NotInitialized,
    /// Non-positive canvas size, or a canvas too short to hold a heat buffer.
    InvalidDimensions { cols: i32, rows: i32 },
    /// The host refused the buffer allocation, or its size overflows `usize`.
    AllocationFailure { bytes: usize },
    /// Colour code above `TRANSPARENT` (0x20).
    InvalidColor { fg: u8, bg: u8 },
}

impl fmt::Display for FireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "fire simulation is not initialized"),
            Self::InvalidDimensions { cols, rows } => {
                write!(f, "invalid canvas dimensions {cols}x{rows}")
            }
            Self::AllocationFailure { bytes } => {
                write!(f, "failed to allocate {bytes} bytes")
            }
            Self::InvalidColor { fg, bg } => {
                write!(f, "invalid colour pair fg={fg:#x} bg={bg:#x}")
            }
        }
    }
}

impl std::error::Error for FireError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            FireError::NotInitialized.to_string(),
            "fire simulation is not initialized"
        );
        assert_eq!(
            FireError::InvalidDimensions { cols: 0, rows: 5 }.to_string(),
            "invalid canvas dimensions 0x5"
        );
        assert_eq!(
            FireError::AllocationFailure { bytes: 12 }.to_string(),
            "failed to allocate 12 bytes"
        );
        assert_eq!(
            FireError::InvalidColor { fg: 0x30, bg: 1 }.to_string(),
            "invalid colour pair fg=0x30 bg=0x1"
        );
    }

    #[test]
    fn is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(FireError::NotInitialized);
        assert!(err.source().is_none());
    }
}
