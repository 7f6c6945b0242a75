//! Torrust Swarm application.
//!
//! The node application has a global configuration for multiple jobs.
//! It's basically a container for other services.
//!
//! The application is responsible for starting some jobs depending on the
//! configuration.
//!
//! Optional jobs:
//!
//! - Swarm cleaner: it removes the peers that stopped reporting.
//! - Status API: the HTTP API can be enabled/disabled.
use std::sync::Arc;

use tokio::task::JoinHandle;
use torrust_swarm_configuration::Configuration;

use crate::bootstrap::jobs::{status_api, swarm_cleanup};
use crate::{core, servers};

/// Starts the jobs enabled in the configuration and returns their handles.
pub async fn start(config: &Configuration, node: Arc<core::Node>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Start HTTP API
    if config.http_api.enabled {
        if let Some(job) = status_api::start_job(&config.http_api, node.clone(), servers::apis::Version::V1).await {
            jobs.push(job);
        };
    }

    // Start runners to remove inactive peers, every interval
    if config.core.inactive_peer_cleanup_interval > 0 {
        jobs.push(swarm_cleanup::start_job(&config.core, &node));
    }

    jobs
}
