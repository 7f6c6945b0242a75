//! API routes for the [`torrent`](crate::servers::apis::v1::context::torrent) API context.
//!
//! - `GET /torrents`
//! - `POST /torrents`
//! - `GET /torrent/{info_hash}`
//! - `DELETE /torrent/{info_hash}`
//! - `POST /torrent/{info_hash}/metainfo`
//! - `POST /torrent/{info_hash}/pause`
//! - `POST /torrent/{info_hash}/resume`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::torrent).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    add_torrent_handler, delete_torrent_handler, get_torrent_handler, get_torrents_handler, pause_torrent_handler,
    resume_torrent_handler, set_metainfo_handler,
};
use crate::core::Node;

/// It adds the routes to the router for the [`torrent`](crate::servers::apis::v1::context::torrent) API context.
pub fn add(prefix: &str, router: Router, node: Arc<Node>) -> Router {
    router
        .route(
            &format!("{prefix}/torrents"),
            get(get_torrents_handler)
                .post(add_torrent_handler)
                .with_state(node.clone()),
        )
        .route(
            &format!("{prefix}/torrent/{{info_hash}}"),
            get(get_torrent_handler)
                .delete(delete_torrent_handler)
                .with_state(node.clone()),
        )
        .route(
            &format!("{prefix}/torrent/{{info_hash}}/metainfo"),
            post(set_metainfo_handler).with_state(node.clone()),
        )
        .route(
            &format!("{prefix}/torrent/{{info_hash}}/pause"),
            post(pause_torrent_handler).with_state(node.clone()),
        )
        .route(
            &format!("{prefix}/torrent/{{info_hash}}/resume"),
            post(resume_torrent_handler).with_state(node),
        )
}
