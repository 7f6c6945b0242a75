//! Node domain services.
//!
//! - [Status](crate::core::services::status): read-only projections of the registry (views, summaries, speeds).
//! - [Units](crate::core::services::units): human readable sizes, speeds and progress.
pub mod status;
pub mod units;

use torrust_swarm_configuration::Configuration;

use crate::core::Node;

/// It returns a new node building its dependencies.
#[must_use]
pub fn node_factory(config: &Configuration) -> Node {
    Node::new(&config.core)
}
