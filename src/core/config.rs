use serde::Deserialize;
use std::path::Path;

use crate::core::charset::normalize_tld;
use crate::core::errors::ConverterError;

/// Environment variable naming a TOML config file, used when no path is given.
pub const CONFIG_ENV_VAR: &str = "HC_HEX_CONFIG";

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// Minimum confidence a charset guess needs before it is used (0.0 accepts any guess)
    #[serde(default = "ConverterConfig::default_min_confidence")]
    pub min_confidence: f32,

    /// Whether the detector may answer UTF-8
    #[serde(default = "ConverterConfig::default_allow_utf8_guess")]
    pub allow_utf8_guess: bool,

    /// Top-level domain hint for the detector, e.g. "ru" or "jp"
    #[serde(default)]
    pub tld: Option<String>,

    /// Strip a trailing '\r' from file lines
    #[serde(default = "ConverterConfig::default_strip_carriage_return")]
    pub strip_carriage_return: bool,

    /// Skip empty file lines instead of converting them
    #[serde(default)]
    pub skip_blank_lines: bool,
}

impl ConverterConfig {
    fn default_min_confidence() -> f32 { 0.0 }
    fn default_allow_utf8_guess() -> bool { true }
    fn default_strip_carriage_return() -> bool { true }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConverterError> {
        let mut config: ConverterConfig = toml::from_str(content)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, else from `$HC_HEX_CONFIG`, else defaults.
    ///
    /// A path that was named explicitly (either way) must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConverterError> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(std::path::PathBuf::from);
        let Some(path) = path.map(Path::to_path_buf).or(from_env) else {
            tracing::debug!("no config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            ConverterError::ConfigError(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConverterError> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ConverterError::ConfigError(format!(
                "min_confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }
        if let Some(tld) = &self.tld {
            if normalize_tld(tld).is_none() {
                return Err(ConverterError::ConfigError(format!("invalid tld hint: {:?}", tld)));
            }
        }
        Ok(())
    }

    fn normalize(&mut self) {
        if let Some(tld) = self.tld.as_mut() {
            if let Some(hint) = normalize_tld(tld) {
                *tld = hint;
            }
        }
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            min_confidence: Self::default_min_confidence(),
            allow_utf8_guess: Self::default_allow_utf8_guess(),
            tld: None,
            strip_carriage_return: Self::default_strip_carriage_return(),
            skip_blank_lines: false,
        }
    }
}
