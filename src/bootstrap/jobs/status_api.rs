//! Status API job starter.
//!
//! The [`status_api::start_job`](crate::bootstrap::jobs::status_api::start_job)
//! function starts the node status API.
//!
//! > **NOTICE**: that even thought there is only one job the API has different
//! > versions. API consumers can choose which version to use. The API version is
//! > part of the URL, for example: `http://localhost:1212/api/v1/stats`.
//!
//! The job binds the socket before it returns, so the API is accepting
//! connections once the job handle is available. The spawned task waits
//! until the server is halted by a global shutdown signal.
//!
//! Refer to the [configuration documentation](https://docs.rs/torrust-swarm-configuration)
//! for the API configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::task::JoinHandle;
use torrust_swarm_configuration::HttpApi;
use tracing::{error, info};

use crate::core::Node;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::apis::Version;

/// This function starts a new API server with the provided configuration.
///
/// It returns `None` if the API is disabled in the configuration or the
/// server could not be started.
pub async fn start_job(config: &HttpApi, node: Arc<Node>, version: Version) -> Option<JoinHandle<()>> {
    if config.enabled {
        match version {
            Version::V1 => start_v1(config.bind_address, node).await,
        }
    } else {
        info!("Note: Not loading the status API, not enabled in configuration.");
        None
    }
}

async fn start_v1(socket: SocketAddr, node: Arc<Node>) -> Option<JoinHandle<()>> {
    let server = match ApiServer::new(Launcher::new(socket)).start(node).await {
        Ok(server) => server,
        Err(err) => {
            error!(%err, "unable to start the status API");
            return None;
        }
    };

    Some(tokio::spawn(async move {
        // Keep the halt channel open: only the global shutdown signals stop it.
        let _halt = server.state.halt_task;

        if let Err(err) = server.state.task.await {
            error!(%err, "the status API task failed");
        }
    }))
}
