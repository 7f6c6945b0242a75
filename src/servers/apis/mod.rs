//! The node status API with all its versions.
//!
//! > **NOTICE**: This API should not be exposed directly to the internet, it is
//! > intended for a local dashboard and for the tools of the node owner.
//!
//! Endpoints for the latest API: [v1].
//!
//! # Table of contents
//!
//! - [Configuration](#configuration)
//! - [Versioning](#versioning)
//! - [Endpoints](#endpoints)
//! - [Errors](#errors)
//!
//! # Configuration
//!
//! The configuration file has a [`[http_api]`](torrust_swarm_configuration::HttpApi)
//! section that can be used to enable the API.
//!
//! ```toml
//! [http_api]
//! enabled = true
//! bind_address = "127.0.0.1:1212"
//! ```
//!
//! When you run the node with the API enabled, you will see the following message:
//!
//! ```text
//! Loading configuration from default configuration file: "./share/default/config/swarm.toml" ...
//! 2024-06-10T16:20:45.612521Z  INFO torrust_swarm::bootstrap::logging: Logging initialized
//! 2024-06-10T16:20:45.613001Z  INFO torrust_swarm::bootstrap::jobs::status_api: Starting status API on: http://127.0.0.1:1212
//! ```
//!
//! You can test the API with `curl`:
//!
//! ```bash
//! $ curl -s "http://127.0.0.1:1212/api/v1/stats"
//! ```
//!
//! The response will be a JSON object. For example, the [node statistics
//! endpoint](crate::servers::apis::v1::context::stats):
//!
//! ```json
//! {
//!   "torrents": 1,
//!   "peers": 3,
//!   "seeders": 1,
//!   "leechers": 2
//! }
//! ```
//!
//! # Versioning
//!
//! The API is versioned and each version has its own module. The API server
//! runs all the API versions on the same server using the same port.
//! Currently there is only one API version: [v1].
//!
//! # Endpoints
//!
//! Refer to the [v1] module for the list of available API endpoints.
//!
//! # Errors
//!
//! Failed actions return a JSON [`ActionStatus`](crate::servers::apis::v1::responses::ActionStatus)
//! with a reason:
//!
//! Status | When
//! ---|---
//! `400` | The info-hash in the URL or the magnet link in the body is not valid.
//! `404` | The torrent is not registered.
//! `409` | The torrent is already registered, or it can not change to the requested status.
pub mod routes;
pub mod server;
pub mod v1;

use serde::Deserialize;

/// The info-hash URL path parameter.
///
/// Some API endpoints require an info-hash as a path parameter.
///
/// For example: `http://localhost:1212/api/v1/torrent/{info_hash}`.
///
/// The info-hash represents the value collected from the URL path parameter.
/// It does not include validation as this is done by the API endpoint handler,
/// in order to provide a more specific error message.
#[derive(Deserialize)]
pub struct InfoHashParam(pub String);

/// The API version.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Version {
    /// The `v1` version of the API.
    V1,
}
