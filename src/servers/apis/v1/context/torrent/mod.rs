//! Torrents API context.
//!
//! This API context is responsible for handling all the requests related to
//! the torrents registered in the node.
//!
//! # Endpoints
//!
//! - [List torrents](#list-torrents)
//! - [Get a torrent](#get-a-torrent)
//! - [Add a torrent](#add-a-torrent)
//! - [Set the metainfo of a torrent](#set-the-metainfo-of-a-torrent)
//! - [Remove a torrent](#remove-a-torrent)
//! - [Pause and resume a torrent](#pause-and-resume-a-torrent)
//!
//! # List torrents
//!
//! `GET /torrents`
//!
//! Returns the global summary and all the information about every torrent.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:1212/api/v1/torrents"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "summary": { "torrents": 1, "peers": 0, "seeders": 0, "leechers": 0 },
//!   "torrents": [ { "info_hash": "5452869be36f9f3350ccee6b4544e7e76caaadab", "...": "..." } ]
//! }
//! ```
//!
//! # Get a torrent
//!
//! `GET /torrent/{info_hash}`
//!
//! Returns all the information about a torrent.
//!
//! **Path parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `info_hash` | 40-char string | The Info Hash v1 | Yes | `5452869be36f9f3350ccee6b4544e7e76caaadab`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:1212/api/v1/torrent/5452869be36f9f3350ccee6b4544e7e76caaadab"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!   "info_hash": "5452869be36f9f3350ccee6b4544e7e76caaadab",
//!   "name": "ubuntu.iso",
//!   "magnet_link": "magnet:?xt=urn:btih:5452869be36f9f3350ccee6b4544e7e76caaadab&dn=ubuntu.iso",
//!   "status": "started",
//!   "progress": 50.0,
//!   "progress_display": "50.0%",
//!   "downloaded": 1536,
//!   "uploaded": 0,
//!   "left": 1536,
//!   "total_size": 3072,
//!   "total_size_display": "3.00 KB",
//!   "piece_length": 1024,
//!   "piece_count": 3,
//!   "download_speed": 2560.0,
//!   "download_speed_display": "2.50 KB/s",
//!   "upload_speed": 0.0,
//!   "upload_speed_display": "0 B/s",
//!   "connected_peers": 1,
//!   "seeders": 1,
//!   "leechers": 0,
//!   "swarm_efficiency": 0.0,
//!   "files": [ { "path": "ubuntu.iso", "length": 3072 } ],
//!   "trackers": [],
//!   "peers": [
//!     {
//!       "peer_id": "2d71423030303030303030303030303030303031",
//!       "peer_addr": "192.168.1.88:17548",
//!       "pieces_held": 3,
//!       "progress": 100.0,
//!       "seeder": true,
//!       "peer_choking": true,
//!       "peer_interested": false,
//!       "updated": 1680082693001
//!     }
//!   ]
//! }
//! ```
//!
//! **Not Found response** `404`
//!
//! ```json
//! { "status": "err", "reason": "torrent not known" }
//! ```
//!
//! **Resource**
//!
//! Refer to the API [`Torrent`](crate::servers::apis::v1::context::torrent::resources::torrent::Torrent)
//! resource for more information about the response attributes.
//!
//! # Add a torrent
//!
//! `POST /torrents`
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:1212/api/v1/torrents" \
//!      -H "Content-Type: application/json" \
//!      -d '{"magnet_url": "magnet:?xt=urn:btih:5452869be36f9f3350ccee6b4544e7e76caaadab&dn=ubuntu.iso", "total_size": 3072, "piece_length": 1024}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! { "info_hash": "5452869be36f9f3350ccee6b4544e7e76caaadab" }
//! ```
//!
//! Refer to the [`AddTorrentForm`](crate::servers::apis::v1::context::torrent::forms::AddTorrentForm)
//! for the optional fields. A `total_size` that does not match the sum of the
//! file lengths, or a zero `piece_length`, is a `400`.
//!
//! # Set the metainfo of a torrent
//!
//! `POST /torrent/{info_hash}/metainfo`
//!
//! For torrents added from a magnet link alone. A torrent of unknown size
//! never completes and has no seeders until its metainfo is set.
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:1212/api/v1/torrent/5452869be36f9f3350ccee6b4544e7e76caaadab/metainfo" \
//!      -H "Content-Type: application/json" \
//!      -d '{"piece_length": 1024, "files": [{"path": "ubuntu.iso", "length": 3072}]}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! { "status": "ok" }
//! ```
//!
//! Once the torrent has downloaded any byte its metainfo can not change: `409`.
//!
//! # Remove a torrent
//!
//! `DELETE /torrent/{info_hash}`
//!
//! **Example response** `200`
//!
//! ```json
//! { "status": "ok" }
//! ```
//!
//! # Pause and resume a torrent
//!
//! `POST /torrent/{info_hash}/pause` and `POST /torrent/{info_hash}/resume`
//!
//! **Example response** `200`
//!
//! ```json
//! { "info_hash": "5452869be36f9f3350ccee6b4544e7e76caaadab", "status": "paused" }
//! ```
//!
//! Pausing a paused torrent, or resuming one that is not paused, is a `409`.
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
