//! Configuration data structures for the Torrust Swarm node.
//!
//! The configuration is loaded with [`figment`] from a TOML document (inline
//! in an environment variable or in a file) and then overridden by
//! `TORRUST_SWARM_` prefixed environment variables. Nested keys are separated
//! with a double underscore, for example `TORRUST_SWARM_CORE__PIECE_LENGTH`.
//!
//! The current version for configuration is [`v1`].
pub mod v1;

use std::env;
use std::panic::Location;

use thiserror::Error;

/// Default path of the configuration file.
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/swarm.toml";

// Environment variables

/// The whole `swarm.toml` file content. It has priority over the config file.
pub const ENV_VAR_CONFIG_TOML: &str = "TORRUST_SWARM_CONFIG_TOML";

/// The `swarm.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "TORRUST_SWARM_CONFIG_TOML_PATH";

/// Prefix for the environment variables that override single values.
pub const ENV_VAR_PREFIX: &str = "TORRUST_SWARM_";

pub type Configuration = v1::Configuration;
pub type Core = v1::core::Core;
pub type HttpApi = v1::http_api::HttpApi;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;

/// Where the configuration comes from.
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Reads the configuration sources from the environment.
    ///
    /// `TORRUST_SWARM_CONFIG_TOML` wins over any file. Otherwise the file in
    /// `TORRUST_SWARM_CONFIG_TOML_PATH` is used, falling back to
    /// `default_config_toml_path`.
    #[must_use]
    pub fn new(default_config_toml_path: String) -> Self {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Self {
            config_toml,
            config_toml_path,
        }
    }

    /// Sources for an inline TOML document only.
    #[must_use]
    pub fn from_toml(config_toml: &str) -> Self {
        Self {
            config_toml: Some(config_toml.to_owned()),
            config_toml_path: DEFAULT_PATH_CONFIG.to_owned(),
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The merged sources could not be extracted into a [`Configuration`].
    #[error("Failed processing the configuration: {source}, {location}")]
    ConfigError {
        source: Box<figment::Error>,
        location: &'static Location<'static>,
    },

    #[error("Unable to encode the configuration as TOML: {source}, {location}")]
    UnableToEncodeToml {
        source: toml::ser::Error,
        location: &'static Location<'static>,
    },

    #[error("Unable to write the configuration file `{path}`: {source}, {location}")]
    UnableToWriteFile {
        path: String,
        source: std::io::Error,
        location: &'static Location<'static>,
    },

    /// Pieces must have at least one byte.
    #[error("The piece length must be greater than zero, {location}")]
    InvalidPieceLength { location: &'static Location<'static> },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: Box::new(err),
            location: Location::caller(),
        }
    }
}
