//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `TORRUST_SWARM_`.
use torrust_swarm_configuration::{Configuration, Info, DEFAULT_PATH_CONFIG};

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `swarm.toml`. Its path can be changed with `TORRUST_SWARM_CONFIG_TOML_PATH`.
/// 2. Environment variable: `TORRUST_SWARM_CONFIG_TOML`. The variable contains the same contents as the `swarm.toml` file.
///
/// Environment variable has priority over the config file. Single values can
/// be overridden with variables like `TORRUST_SWARM_CORE__PIECE_LENGTH`.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either the config
/// file or the env var `TORRUST_SWARM_CONFIG_TOML`.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string());

    Configuration::load(&info).expect("Error loading configuration")
}
