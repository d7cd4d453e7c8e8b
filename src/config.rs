use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{AmountPolicy, ColorStrategy};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "GH₵";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportConfig {
    pub contact: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub amount_policy: AmountPolicy,
    pub color_strategy: ColorStrategy,
    pub support: SupportConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            amount_policy: AmountPolicy::default(),
            color_strategy: ColorStrategy::default(),
            support: SupportConfig::default(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(String),
    Io(std::io::Error),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(path) => write!(f, "config file not found: {path}"),
            ConfigError::Io(e) => write!(f, "failed to read config: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl Config {
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Reads the config at `path`.
    ///
    /// When `required` is false a missing file yields the defaults.
    pub fn load(path: &Path, required: bool) -> Result<Self, ConfigError> {
        if !path.exists() {
            if required {
                return Err(ConfigError::Missing(path.display().to_string()));
            }
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).map_err(ConfigError::Io)?;
        let cfg = Self::from_toml(&data)?;
        if cfg.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol must not be empty".to_string(),
            ));
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.currency_symbol, "GH₵");
    }

    #[test]
    fn parses_policies() {
        let cfg = Config::from_toml(
            r#"
amount_policy = "reject"
color_strategy = "keyed"
"#,
        )
        .unwrap();
        assert_eq!(cfg.amount_policy, AmountPolicy::Reject);
        assert_eq!(cfg.color_strategy, ColorStrategy::Keyed);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!(Config::from_toml("amount_policy = \"maybe\"").is_err());
    }
}
