use serde::Deserialize;
use thiserror::Error;

/// Plies the engine supports; deeper searches are clamped here.
const DEPTH_RANGE: std::ops::RangeInclusive<u8> = 1..=4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid engine config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Engine settings, loadable from TOML by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search depth in plies.
    pub depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig { depth: 2 }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        Ok(config.clamped())
    }

    /// Depth forced into the supported range.
    pub fn clamped(self) -> EngineConfig {
        EngineConfig {
            depth: self.depth.clamp(*DEPTH_RANGE.start(), *DEPTH_RANGE.end()),
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_depth_is_two() {
        assert_eq!(EngineConfig::default().depth, 2);
    }

    #[test]
    fn parses_toml_and_fills_defaults() {
        let config = EngineConfig::from_toml_str("depth = 3").unwrap();
        assert_eq!(config.depth, 3);
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn depth_is_clamped_to_supported_range() {
        assert_eq!(EngineConfig::from_toml_str("depth = 0").unwrap().depth, 1);
        assert_eq!(EngineConfig::from_toml_str("depth = 12").unwrap().depth, 4);
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(EngineConfig::from_toml_str("depth = \"deep\"").is_err());
    }
}
