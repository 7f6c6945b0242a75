//! The first version of the node status API.
//!
//! Endpoints are grouped in contexts:
//!
//! - [Torrent](crate::servers::apis::v1::context::torrent): list, detail, add, remove, pause and resume.
//! - [Stats](crate::servers::apis::v1::context::stats): the global summary.
//! - [Health check](crate::servers::apis::v1::context::health_check): liveness.
//!
//! Every endpoint is under `/api/v1`, except the health check, which is
//! `/api/health_check`.
pub mod context;
pub mod responses;
pub mod routes;
