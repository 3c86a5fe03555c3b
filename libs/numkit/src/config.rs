//! Configuration for numkit consumers
//!
//! Priority (highest to lowest):
//! 1. Environment variables (`NUMKIT_` prefix, e.g. `NUMKIT_DEFAULT_ORDER=LE`)
//! 2. `numkit.yaml`
//! 3. `numkit.toml`
//! 4. Default values

use crate::bytes::ByteOrder;
use crate::error::{NumkitError, Result};
use crate::hex::HexMode;
use crate::random::MAX_FLOAT_PRECISION;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "NUMKIT_";

/// Settings shared by the CLI and embedding applications
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct NumkitConfig {
    /// Byte order used when no explicit order or reversal is requested
    pub default_order: ByteOrder,
    /// Hex numeral parsing mode
    pub hex_mode: HexMode,
    /// Render hex output in uppercase
    pub uppercase: bool,
    /// Decimal places for random float draws
    pub float_precision: u32,
}

impl Default for NumkitConfig {
    fn default() -> Self {
        Self {
            default_order: ByteOrder::BigEndian,
            hex_mode: HexMode::Compat,
            uppercase: true,
            float_precision: 2,
        }
    }
}

impl NumkitConfig {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.float_precision > MAX_FLOAT_PRECISION {
            return Err(NumkitError::config(format!(
                "float_precision {} exceeds maximum {}",
                self.float_precision, MAX_FLOAT_PRECISION
            )));
        }
        Ok(())
    }
}

/// Load configuration from the current directory and environment
pub fn load_config() -> Result<NumkitConfig> {
    load_config_in(Path::new("."))
}

/// Load configuration from `numkit.toml` / `numkit.yaml` in `dir` and environment
///
/// Missing files are skipped.
pub fn load_config_in(dir: &Path) -> Result<NumkitConfig> {
    let figment = Figment::from(Serialized::defaults(NumkitConfig::default()))
        .merge(Toml::file(dir.join("numkit.toml")))
        .merge(Yaml::file(dir.join("numkit.yaml")))
        .merge(Env::prefixed(ENV_PREFIX));

    extract(figment)
}

/// Load configuration from a specific file, with environment overrides
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<NumkitConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(NumkitError::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| NumkitError::config("Config file must have an extension"))?;

    let base = Figment::from(Serialized::defaults(NumkitConfig::default()));
    let figment = match extension {
        "toml" => base.merge(Toml::file(path)),
        "yaml" | "yml" => base.merge(Yaml::file(path)),
        "json" => base.merge(Json::file(path)),
        _ => {
            return Err(NumkitError::config(format!(
                "Unsupported config file format: {}",
                extension
            )))
        },
    };

    info!("Loading configuration from {}", path.display());
    extract(figment.merge(Env::prefixed(ENV_PREFIX)))
}

fn extract(figment: Figment) -> Result<NumkitConfig> {
    let config: NumkitConfig = figment
        .extract()
        .map_err(|e| NumkitError::config(format!("Failed to load configuration: {}", e)))?;
    config.validate()?;
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_when_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_in(dir.path()).unwrap();
        assert_eq!(config, NumkitConfig::default());
    }

    #[test]
    fn test_toml_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("numkit.toml"),
            "default_order = \"LE\"\nhex_mode = \"strict\"\n",
        )
        .unwrap();

        let config = load_config_in(dir.path()).unwrap();
        assert_eq!(config.default_order, ByteOrder::LittleEndian);
        assert_eq!(config.hex_mode, HexMode::Strict);
        assert!(config.uppercase);
    }

    #[test]
    fn test_yaml_overrides_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("numkit.toml"), "float_precision = 4\n").unwrap();
        fs::write(dir.path().join("numkit.yaml"), "float_precision: 6\n").unwrap();

        let config = load_config_in(dir.path()).unwrap();
        assert_eq!(config.float_precision, 6);
    }

    #[test]
    fn test_validation_rejects_precision() {
        let config = NumkitConfig {
            float_precision: 99,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(NumkitError::Config(_))));
    }

    #[test]
    fn test_unknown_byte_order_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("numkit.toml"), "default_order = \"CDAB\"\n").unwrap();
        assert!(matches!(
            load_config_in(dir.path()),
            Err(NumkitError::Config(_))
        ));
    }
}
