use serde::Deserialize;
use std::fmt;

use crate::export::DEFAULT_ARRAY_NAME;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Grid half-width `W`; cells run over `[-W, W)` on both axes.
    pub half_width: i32,
    /// Fixed seed for reproducible listings. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Identifier of the emitted array.
    pub array_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            half_width: 1,
            seed: None,
            array_name: DEFAULT_ARRAY_NAME.to_string(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    NegativeHalfWidth(i32),
    BadArrayName(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeHalfWidth(w) => {
                write!(f, "half_width must be non-negative, got {}", w)
            }
            ConfigError::BadArrayName(name) => {
                write!(f, "array_name {:?} is not a valid identifier", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GeneratorConfig {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.half_width < 0 {
            return Err(ConfigError::NegativeHalfWidth(self.half_width));
        }

        let mut chars = self.array_name.chars();
        let valid = match chars.next() {
            Some(c) if c == '_' || c.is_ascii_alphabetic() => {
                chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
            }
            _ => false,
        };
        if !valid {
            return Err(ConfigError::BadArrayName(self.array_name.clone()));
        }

        Ok(())
    }
}
