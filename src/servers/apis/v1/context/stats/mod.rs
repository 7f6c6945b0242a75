//! Node statistics API context.
//!
//! The statistics are the global summary of the swarm registry: how many
//! torrents the node has and how many peers, seeders and leechers they have in
//! total.
//!
//! # Endpoints
//!
//! - [Get node statistics](#get-node-statistics)
//!
//! # Get node statistics
//!
//! `GET /stats`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:1212/api/v1/stats"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "torrents": 2,
//!   "peers": 5,
//!   "seeders": 1,
//!   "leechers": 4
//! }
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`Stats`](crate::servers::apis::v1::context::stats::resources::Stats)
//! resource for more information about the response attributes.
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
