//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::{stats, torrent};
use crate::core::Node;

/// Add the routes for the v1 API.
pub fn add(prefix: &str, router: Router, node: Arc<Node>) -> Router {
    let v1_prefix = format!("{prefix}/v1");

    let router = stats::routes::add(&v1_prefix, router, node.clone());
    torrent::routes::add(&v1_prefix, router, node)
}
