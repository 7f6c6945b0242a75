//! API handlers for the [`torrent`](crate::servers::apis::v1::context::torrent)
//! API context.
use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::torrent::Metainfo;
use tracing::debug;

use super::forms::AddTorrentForm;
use super::responses::{
    torrent_added_response, torrent_info_response, torrent_list_response, torrent_not_known_response, torrent_status_response,
};
use crate::core::Node;
use crate::servers::apis::v1::responses::{invalid_info_hash_param_response, node_error_response, ok_response};
use crate::servers::apis::InfoHashParam;

/// It handles the request to get the torrent data.
///
/// It returns:
///
/// - `200` response with a json [`Torrent`](crate::servers::apis::v1::context::torrent::resources::torrent::Torrent).
/// - `400` if the info-hash is not valid.
/// - `404` if the torrent is not known.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::torrent#get-a-torrent)
/// for more information about this endpoint.
pub async fn get_torrent_handler(State(node): State<Arc<Node>>, Path(info_hash): Path<InfoHashParam>) -> Response {
    match InfoHash::from_str(&info_hash.0) {
        Err(_) => invalid_info_hash_param_response(&info_hash.0),
        Ok(info_hash) => match node.per_torrent_view(&info_hash) {
            Some(view) => torrent_info_response(view).into_response(),
            None => torrent_not_known_response(),
        },
    }
}

/// It handles the request to get the summary and all the torrents.
///
/// It returns a `200` response with a json
/// [`TorrentList`](crate::servers::apis::v1::context::torrent::resources::torrent::TorrentList).
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::torrent#list-torrents)
/// for more information about this endpoint.
pub async fn get_torrents_handler(State(node): State<Arc<Node>>) -> Response {
    let (metrics, views) = node.overview();

    torrent_list_response(metrics, views).into_response()
}

/// It handles the request to add a torrent from a magnet link.
///
/// It returns:
///
/// - `200` response with the info-hash of the new torrent.
/// - `400` if the magnet link is not valid or the metainfo is inconsistent.
/// - `409` if the torrent is already registered.
pub async fn add_torrent_handler(State(node): State<Arc<Node>>, Json(form): Json<AddTorrentForm>) -> Response {
    debug!(magnet_url = %form.magnet_url, "add torrent request");

    match node.add_magnet(&form.magnet_url, form.metainfo) {
        Ok(info_hash) => torrent_added_response(info_hash),
        Err(err) => node_error_response(&err),
    }
}

/// It handles the request to set the metainfo of a torrent added from a
/// magnet link alone.
///
/// It returns:
///
/// - `200` response with a [`ActionStatus::Ok`](crate::servers::apis::v1::responses::ActionStatus::Ok) in json.
/// - `400` if the info-hash is not valid or the metainfo is inconsistent.
/// - `404` if the torrent is not known.
/// - `409` if the torrent has already downloaded some bytes.
pub async fn set_metainfo_handler(
    State(node): State<Arc<Node>>,
    Path(info_hash): Path<InfoHashParam>,
    Json(metainfo): Json<Metainfo>,
) -> Response {
    match InfoHash::from_str(&info_hash.0) {
        Err(_) => invalid_info_hash_param_response(&info_hash.0),
        Ok(info_hash) => match node.set_metainfo(&info_hash, metainfo) {
            Ok(()) => ok_response(),
            Err(err) => node_error_response(&err),
        },
    }
}

/// It handles the request to remove a torrent.
///
/// It returns:
///
/// - `200` response with a [`ActionStatus::Ok`](crate::servers::apis::v1::responses::ActionStatus::Ok) in json.
/// - `400` if the info-hash is not valid.
/// - `404` if the torrent is not known.
pub async fn delete_torrent_handler(State(node): State<Arc<Node>>, Path(info_hash): Path<InfoHashParam>) -> Response {
    match InfoHash::from_str(&info_hash.0) {
        Err(_) => invalid_info_hash_param_response(&info_hash.0),
        Ok(info_hash) => match node.remove(&info_hash) {
            Ok(_) => ok_response(),
            Err(err) => node_error_response(&err),
        },
    }
}

/// It handles the request to pause a torrent.
///
/// It returns:
///
/// - `200` response with the new status.
/// - `400` if the info-hash is not valid.
/// - `404` if the torrent is not known.
/// - `409` if the torrent is already paused.
pub async fn pause_torrent_handler(State(node): State<Arc<Node>>, Path(info_hash): Path<InfoHashParam>) -> Response {
    match InfoHash::from_str(&info_hash.0) {
        Err(_) => invalid_info_hash_param_response(&info_hash.0),
        Ok(info_hash) => match node.pause(&info_hash) {
            Ok(status) => torrent_status_response(&info_hash, status),
            Err(err) => node_error_response(&err),
        },
    }
}

/// It handles the request to resume a torrent.
///
/// It returns:
///
/// - `200` response with the new status: `started`, or `seeding` if the
///   download is complete.
/// - `400` if the info-hash is not valid.
/// - `404` if the torrent is not known.
/// - `409` if the torrent is not paused.
pub async fn resume_torrent_handler(State(node): State<Arc<Node>>, Path(info_hash): Path<InfoHashParam>) -> Response {
    match InfoHash::from_str(&info_hash.0) {
        Err(_) => invalid_info_hash_param_response(&info_hash.0),
        Ok(info_hash) => match node.resume(&info_hash) {
            Ok(status) => torrent_status_response(&info_hash, status),
            Err(err) => node_error_response(&err),
        },
    }
}
