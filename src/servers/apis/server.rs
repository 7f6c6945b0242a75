//! Logic to run the HTTP API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`.
//!
//! The `ApiServer` struct is responsible for:
//! - Starting and stopping the server.
//! - Storing the configuration.
//!
//! `ApiServer` relies on a launcher to start the actual server.
//!
//! 1. `ApiServer::start` -> binds the socket and spawns a new asynchronous task.
//! 2. `Launcher::start` -> serves the API on the spawned task until it is halted.
//!
//! The `Launcher` struct is responsible for:
//!
//! - Knowing how to start the server with graceful shutdown.
//!
//! The server is halted either by [`ApiServer::stop`] or by the global
//! shutdown signals (`ctrl_c` or `terminate`).
use std::net::SocketAddr;
use std::panic::Location;
use std::sync::Arc;

use derive_more::Constructor;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot::{Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::routes::router;
use crate::bootstrap::jobs::Started;
use crate::core::Node;
use crate::servers::signals::{shutdown_signal_with_message, Halted};

/// Errors that can occur when starting or stopping the API server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to bind the status API to {addr}: {source}, {location}")]
    UnableToBind {
        addr: SocketAddr,
        source: std::io::Error,
        location: &'static Location<'static>,
    },

    #[error("unable to get the local address of the status API: {source}, {location}")]
    UnableToGetLocalAddress {
        source: std::io::Error,
        location: &'static Location<'static>,
    },

    #[error("unable to send the halting message to the status API, {location}")]
    UnableToSendHaltingMessage { location: &'static Location<'static> },

    #[error("the status API task failed: {source}, {location}")]
    UnableToJoin {
        source: tokio::task::JoinError,
        location: &'static Location<'static>,
    },
}

/// A generic API server that can be in two states: `Stopped` or `Running`.
#[allow(clippy::module_name_repetitions)]
pub struct ApiServer<S> {
    pub state: S,
}

/// The `Stopped` state of the `ApiServer` struct.
pub struct Stopped {
    launcher: Launcher,
}

/// The `Running` state of the `ApiServer` struct.
pub struct Running {
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// Starts the API server with the given node.
    ///
    /// It returns once the socket is bound, so the server is already
    /// accepting connections on [`Running::binding`].
    ///
    /// # Errors
    ///
    /// It would return an error if the socket can not be bound.
    pub async fn start(self, node: Arc<Node>) -> Result<ApiServer<Running>, Error> {
        let location = Location::caller();
        let launcher = self.state.launcher;

        let listener = TcpListener::bind(launcher.bind_to).await.map_err(|source| Error::UnableToBind {
            addr: launcher.bind_to,
            source,
            location,
        })?;

        let binding = listener
            .local_addr()
            .map_err(|source| Error::UnableToGetLocalAddress { source, location })?;

        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let started = Started { address: binding };

        let task = tokio::spawn(async move {
            launcher.start(listener, started, node, rx_halt).await;

            launcher
        });

        Ok(ApiServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// Stops the API server and waits until it has finished serving the
    /// in-flight requests.
    ///
    /// # Errors
    ///
    /// It would return an error if the halt message can not be sent or the
    /// server task failed.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        let location = Location::caller();

        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::UnableToSendHaltingMessage { location })?;

        let launcher = self
            .state
            .task
            .await
            .map_err(|source| Error::UnableToJoin { source, location })?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// A struct responsible for starting the API server.
#[derive(Constructor, Copy, Clone, Debug)]
pub struct Launcher {
    bind_to: SocketAddr,
}

impl Launcher {
    /// Serves the API on the bound listener until a halt or shutdown signal
    /// is received.
    async fn start(&self, listener: TcpListener, started: Started, node: Arc<Node>, rx_halt: Receiver<Halted>) {
        let address = started.address;

        info!(target: "API", "Starting status API on: http://{address}");

        let app = router(node);

        let result = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal_with_message(
                rx_halt,
                format!("Shutting down status API on: http://{address}"),
            ))
            .await;

        match result {
            Ok(()) => info!(target: "API", "Status API on http://{address} stopped"),
            Err(err) => error!(target: "API", %err, "Status API on http://{address} failed"),
        }
    }
}
