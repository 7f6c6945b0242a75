//! Setup for the main node application.
//!
//! The [`setup`] only builds the application and its dependencies but it does
//! not start the application. In fact, there is no such thing as the main
//! application process. When the application starts, the only thing it does is
//! starting a bunch of independent jobs. If you are looking for how things are
//! started you should read [`app::start`](crate::app::start) function
//! documentation.
//!
//! Setup steps:
//!
//! 1. Load the global application configuration.
//! 2. Initialize static variables.
//! 3. Initialize logging.
//! 4. Initialize the domain node.
use std::sync::Arc;

use torrust_swarm_clock::static_time;
use torrust_swarm_configuration::Configuration;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::services::node_factory;
use crate::core::Node;

/// It loads the configuration from the environment and builds the main domain [`Node`] struct.
#[must_use]
pub fn setup() -> (Configuration, Arc<Node>) {
    let configuration = initialize_configuration();
    let node = initialize_with_configuration(&configuration);

    (configuration, node)
}

/// It initializes the application with the given configuration.
///
/// The configuration may be obtained from the environment (via config file or env vars).
#[must_use]
pub fn initialize_with_configuration(configuration: &Configuration) -> Arc<Node> {
    initialize_static();
    initialize_logging(configuration);
    Arc::new(initialize_node(configuration))
}

/// It initializes the application static values.
///
/// These values are accessible throughout the entire application.
pub fn initialize_static() {
    // Set the time of Torrust app starting
    lazy_static::initialize(&static_time::TIME_AT_APP_START);
}

/// It builds the domain node.
#[must_use]
pub fn initialize_node(config: &Configuration) -> Node {
    node_factory(config)
}

/// It initializes the log threshold, format and channel.
///
/// See [the logging setup](crate::bootstrap::logging::setup) for more info about logging.
pub fn initialize_logging(config: &Configuration) {
    bootstrap::logging::setup(config);
}
