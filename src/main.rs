use torrust_swarm::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, node) = bootstrap::app::setup();

    let jobs = app::start(&config, node.clone()).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Torrust shutting down..");

            node.pause_all();

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("Torrust successfully shutdown.");
        }
    }
}
