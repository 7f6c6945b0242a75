//! Version `1` of the configuration.
//!
//! Every field has a default, so an empty document is a valid configuration.
//! This is the default configuration:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [core]
//! piece_length = 524288
//! max_peer_timeout = 900
//! inactive_peer_cleanup_interval = 600
//! speed_sampling_window = 1
//!
//! [http_api]
//! enabled = true
//! bind_address = "127.0.0.1:1212"
//! ```
pub mod core;
pub mod http_api;
pub mod logging;

use std::fs;
use std::panic::Location;

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::core::Core;
use self::http_api::HttpApi;
use self::logging::Logging;
use crate::{Error, Info, ENV_VAR_PREFIX};

/// Configuration for the swarm node.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration
    #[serde(default)]
    pub logging: Logging,

    /// Swarm bookkeeping configuration.
    #[serde(default)]
    pub core: Core,

    /// The status API configuration.
    #[serde(default)]
    pub http_api: HttpApi,
}

impl Configuration {
    /// Loads the configuration from the sources described by `info`.
    ///
    /// The inline TOML document takes priority over the file. Environment
    /// variables override both.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the sources can not be merged into a valid
    /// configuration.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::from(Toml::string(config_toml))
        } else {
            Figment::from(Toml::file(&info.config_toml_path))
        };

        let config: Configuration = figment.merge(Env::prefixed(ENV_VAR_PREFIX).split("__")).extract()?;

        config.validate()?;

        Ok(config)
    }

    /// Loads the configuration from a TOML file, with environment overrides.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file has a bad configuration.
    pub fn load_from_file(path: &str) -> Result<Configuration, Error> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_VAR_PREFIX).split("__"));

        let config: Configuration = figment.extract()?;

        config.validate()?;

        Ok(config)
    }

    /// Saves the configuration to the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can not be encoded or the file
    /// can not be written.
    #[track_caller]
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        let location = Location::caller();

        let toml = self.to_toml()?;

        fs::write(path, toml).map_err(|source| Error::UnableToWriteFile {
            path: path.to_owned(),
            source,
            location,
        })
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration can not be encoded.
    #[track_caller]
    pub fn to_toml(&self) -> Result<String, Error> {
        let location = Location::caller();

        toml::to_string(self).map_err(|source| Error::UnableToEncodeToml { source, location })
    }

    /// Encodes the configuration to JSON. Used to log the final
    /// configuration at startup.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    #[track_caller]
    fn validate(&self) -> Result<(), Error> {
        if self.core.piece_length == 0 {
            return Err(Error::InvalidPieceLength {
                location: Location::caller(),
            });
        }

        Ok(())
    }
}
