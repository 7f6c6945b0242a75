//! Common responses for the API v1 shared by all the contexts.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use torrust_swarm_registry::error::Error as RegistryError;

use crate::core::error::Error;

/// Response status used when requests have only two possible results
/// `Ok` or `Error` and no data is returned.
#[derive(Serialize, Debug)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionStatus<'a> {
    Ok,
    Err { reason: std::borrow::Cow<'a, str> },
}

// OK response

#[must_use]
pub fn ok_response() -> Response {
    (StatusCode::OK, Json(ActionStatus::Ok)).into_response()
}

// Error responses

#[must_use]
pub fn invalid_info_hash_param_response(info_hash: &str) -> Response {
    bad_request_response(&format!(
        "Invalid URL: invalid infohash param: string \"{info_hash}\", expected a 40 character long string"
    ))
}

#[must_use]
pub fn bad_request_response(reason: &str) -> Response {
    action_error_response(StatusCode::BAD_REQUEST, reason)
}

#[must_use]
pub fn not_found_response(reason: &str) -> Response {
    action_error_response(StatusCode::NOT_FOUND, reason)
}

#[must_use]
pub fn conflict_response(reason: &str) -> Response {
    action_error_response(StatusCode::CONFLICT, reason)
}

/// Maps a failed node operation to its response:
///
/// - `400` for a link that is not a magnet link or has no valid info-hash,
///   and for an inconsistent metainfo.
/// - `404` for an unknown torrent or peer.
/// - `409` for a duplicated torrent, a forbidden status change or a metainfo
///   change after the download started.
#[must_use]
pub fn node_error_response(err: &Error) -> Response {
    let reason = err.to_string();

    match err {
        Error::Magnet { .. } => bad_request_response(&reason),
        Error::Registry { source } => match source {
            RegistryError::InvalidMetainfo { .. } => bad_request_response(&reason),
            RegistryError::NotFound { .. } => not_found_response(&reason),
            RegistryError::AlreadyExists { .. } | RegistryError::InvalidTransition { .. } | RegistryError::MetainfoLocked { .. } => {
                conflict_response(&reason)
            }
        },
    }
}

fn action_error_response(status: StatusCode, reason: &str) -> Response {
    (status, Json(ActionStatus::Err { reason: reason.into() })).into_response()
}
