//! Runtime settings for the calculator UI.
//!
//! Values are resolved in three layers: built-in defaults, then an optional
//! TOML file, then command-line flags.
//!
//! ```toml
//! bind = "127.0.0.1:8501"
//! default_income_1 = 50000
//! default_income_2 = 40000
//! income_step = 1000
//! ```

use std::{
    fs,
    net::{Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Address the web form listens on.
    pub bind: SocketAddr,
    /// Prefilled income for person 1.
    pub default_income_1: Decimal,
    /// Prefilled income for person 2.
    pub default_income_2: Decimal,
    /// Step of the income inputs.
    pub income_step: Decimal,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT)),
            default_income_1: Decimal::new(50000, 0),
            default_income_2: Decimal::new(40000, 0),
            income_step: Decimal::new(1000, 0),
        }
    }
}

/// Shape of the TOML file; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    bind: Option<SocketAddr>,
    default_income_1: Option<Decimal>,
    default_income_2: Option<Decimal>,
    income_step: Option<Decimal>,
}

impl UiConfig {
    /// Loads defaults, overlaid with `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => {
                let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                debug!(path = %path.display(), "loaded config file");
                parse_file(&contents).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => FileConfig::default(),
        };

        let defaults = Self::default();
        let config = Self {
            bind: file.bind.unwrap_or(defaults.bind),
            default_income_1: file.default_income_1.unwrap_or(defaults.default_income_1),
            default_income_2: file.default_income_2.unwrap_or(defaults.default_income_2),
            income_step: file.income_step.unwrap_or(defaults.income_step),
        };
        config.validate()?;
        Ok(config)
    }

    /// Applies a `--bind` flag.
    pub fn with_bind(
        mut self,
        bind: Option<SocketAddr>,
    ) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_income_1 < Decimal::ZERO || self.default_income_2 < Decimal::ZERO {
            return Err(ConfigError::Invalid(
                "default incomes must not be negative".to_string(),
            ));
        }
        if self.income_step <= Decimal::ZERO {
            return Err(ConfigError::Invalid(
                "income_step must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_file(contents: &str) -> Result<FileConfig, toml::de::Error> {
    toml::from_str(contents)
}
