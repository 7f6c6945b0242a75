//! Job that runs a task on intervals to remove inactive peers.
//!
//! **Inactive peers** are peers that have not been updated for more than
//! `max_peer_timeout` seconds. `max_peer_timeout` is a customizable core
//! option.
//!
//! Refer to [`torrust-swarm-configuration documentation`](https://docs.rs/torrust-swarm-configuration) for more info about those options.
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use torrust_swarm_configuration::Core;

use crate::core::Node;

/// It starts a job for removing the inactive peers of every torrent.
///
/// The cleaning task is executed on an `inactive_peer_cleanup_interval`. The
/// job stops on `ctrl_c` or when the node is dropped.
#[must_use]
pub fn start_job(config: &Core, node: &Arc<Node>) -> JoinHandle<()> {
    let weak_node = std::sync::Arc::downgrade(node);
    let interval = config.inactive_peer_cleanup_interval();

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(interval);
        interval.tick().await;

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    tracing::info!("Stopping swarm cleanup job..");
                    break;
                }
                _ = interval.tick() => {
                    if let Some(node) = weak_node.upgrade() {
                        clean_up(&node);
                    } else {
                        break;
                    }
                }
            }
        }
    })
}

/// One cleanup pass. Returns how long it took, on a monotonic clock.
fn clean_up(node: &Node) -> Duration {
    let start = Instant::now();

    tracing::info!("Cleaning up inactive peers..");
    node.cleanup_peers();

    let elapsed = start.elapsed();
    tracing::info!("Cleaned up inactive peers in: {}ms", elapsed.as_millis());

    elapsed
}
