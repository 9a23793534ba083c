//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::error::FireError;
use crate::heat::HeatBuffer;
use crate::rng::DEFAULT_SEED;

/// Canvas size and seed for one simulation instance.
///
/// Missing TOML keys fall back to the defaults (80x32, seed 42), which is
/// also the golden reference scenario.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FireConfig {
    pub cols: i32,
    pub rows: i32,
    pub seed: u32,
}

impl Default for FireConfig {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 32,
            seed: DEFAULT_SEED,
        }
    }
}

impl FireConfig {
    /// # Errors
    /// Returns the TOML parse error verbatim.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// # Errors
    /// `InvalidDimensions` for a canvas that cannot hold a heat buffer.
    pub fn validate(&self) -> Result<(), FireError> {
        HeatBuffer::dimensions(self.cols, self.rows).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_reference_scenario() {
        let config = FireConfig::default();
        assert_eq!((config.cols, config.rows, config.seed), (80, 32, 42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = FireConfig::from_toml_str("cols = 120\nseed = 7\n").unwrap();
        assert_eq!(config.cols, 120);
        assert_eq!(config.rows, 32);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(FireConfig::from_toml_str("cols = \"wide\"").is_err());
    }

    #[test]
    fn validate_rejects_short_canvas() {
        let config = FireConfig {
            rows: 2,
            ..FireConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(FireError::InvalidDimensions { cols: 80, rows: 2 })
        );
    }

    #[test]
    fn toml_round_trip() {
        let config = FireConfig {
            cols: 33,
            rows: 17,
            seed: 9,
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(FireConfig::from_toml_str(&text).unwrap(), config);
    }
}
