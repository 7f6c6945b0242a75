//! API handlers for the [`stats`](crate::servers::apis::v1::context::stats)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;

use super::resources::Stats;
use super::responses::stats_response;
use crate::core::Node;

/// It handles the request to get the node statistics.
///
/// It returns a `200` response with a json [`Stats`].
pub async fn get_stats_handler(State(node): State<Arc<Node>>) -> Json<Stats> {
    stats_response(node.global_summary())
}
