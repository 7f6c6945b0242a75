//! API responses for the [`torrent`](crate::servers::apis::v1::context::torrent)
//! API context.
use axum::response::{IntoResponse, Json, Response};
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::torrent::TorrentStatus;
use torrust_swarm_primitives::torrent_metrics::TorrentsMetrics;

use super::resources::torrent::{AddedTorrent, StatusChange, Torrent, TorrentList};
use crate::core::services::status::TorrentView;
use crate::servers::apis::v1::responses::not_found_response;

/// `200` response that contains the [`TorrentList`] resource as json.
#[must_use]
pub fn torrent_list_response(metrics: TorrentsMetrics, views: Vec<TorrentView>) -> Json<TorrentList> {
    Json(TorrentList::new(metrics, views))
}

/// `200` response that contains a [`Torrent`] resource as json.
#[must_use]
pub fn torrent_info_response(view: TorrentView) -> Json<Torrent> {
    Json(Torrent::from(view))
}

/// `200` response with the info-hash of the torrent that was added.
#[must_use]
pub fn torrent_added_response(info_hash: InfoHash) -> Response {
    Json(AddedTorrent::from(info_hash)).into_response()
}

/// `200` response with the status of the torrent after a pause or a resume.
#[must_use]
pub fn torrent_status_response(info_hash: &InfoHash, status: TorrentStatus) -> Response {
    Json(StatusChange::new(info_hash, status)).into_response()
}

/// `404` error response returned when a torrent is not found.
#[must_use]
pub fn torrent_not_known_response() -> Response {
    not_found_response("torrent not known")
}
