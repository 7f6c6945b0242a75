//! API health check endpoint.
//!
//! It is used to check if the API server is running. Container orchestrators
//! call it to decide whether the node is alive.
//!
//! `GET /api/health_check`
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "status": "Ok"
//! }
//! ```
pub mod handlers;
pub mod resources;
