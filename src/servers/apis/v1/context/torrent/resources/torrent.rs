//! `Torrent` and `TorrentList` API resources.
//!
//! - `Torrent` is the full torrent resource, including its peers.
//! - `TorrentList` is the global summary followed by every torrent.
//! - `AddedTorrent` and `StatusChange` are the results of the actions.
use serde::{Deserialize, Serialize};
use torrust_swarm_magnet::MagnetDescriptor;
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::torrent::{TorrentFile, TorrentStatus};
use torrust_swarm_primitives::torrent_metrics::TorrentsMetrics;

use super::peer::Peer;
use crate::core::services::status::TorrentView;
use crate::core::services::units::{format_progress, format_size, format_speed};
use crate::servers::apis::v1::context::stats::resources::Stats;

/// `Torrent` API resource.
///
/// The `*_display` fields are the same values rendered for humans, for
/// example `"1.50 MB"` or `"42.0%"`.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Torrent {
    /// The torrent's info hash v1.
    pub info_hash: String,
    pub name: String,
    /// A magnet link that identifies the torrent.
    pub magnet_link: String,
    pub status: TorrentStatus,
    /// Percentage in `[0, 100]`.
    pub progress: f64,
    pub progress_display: String,
    pub downloaded: u64,
    pub uploaded: u64,
    pub left: u64,
    pub total_size: u64,
    pub total_size_display: String,
    pub piece_length: u64,
    pub piece_count: u32,
    /// Bytes per second.
    pub download_speed: f64,
    pub download_speed_display: String,
    /// Bytes per second.
    pub upload_speed: f64,
    pub upload_speed_display: String,
    pub connected_peers: usize,
    pub seeders: u32,
    pub leechers: u32,
    /// Percentage in `[0, 100]`.
    pub swarm_efficiency: f64,
    pub files: Vec<TorrentFile>,
    pub trackers: Vec<String>,
    /// The torrent's peers. See [`Peer`].
    pub peers: Vec<Peer>,
}

impl From<TorrentView> for Torrent {
    fn from(view: TorrentView) -> Self {
        let magnet_link = MagnetDescriptor {
            info_hash: view.info_hash,
            name: Some(view.name.clone()),
            trackers: view.trackers.clone(),
        }
        .to_magnet_link();

        Self {
            info_hash: view.info_hash.to_string(),
            name: view.name,
            magnet_link,
            status: view.status,
            progress: view.progress,
            progress_display: format_progress(view.progress),
            downloaded: view.downloaded,
            uploaded: view.uploaded,
            left: view.left,
            total_size: view.total_size,
            total_size_display: format_size(view.total_size),
            piece_length: view.piece_length,
            piece_count: view.piece_count,
            download_speed: view.download_speed,
            download_speed_display: format_speed(view.download_speed),
            upload_speed: view.upload_speed,
            upload_speed_display: format_speed(view.upload_speed),
            connected_peers: view.connected_peers,
            seeders: view.seeders,
            leechers: view.leechers,
            swarm_efficiency: view.swarm_efficiency,
            files: view.files,
            trackers: view.trackers,
            peers: view.peers.into_iter().map(Peer::from).collect(),
        }
    }
}

/// `TorrentList` API resource: the global summary and every torrent.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct TorrentList {
    pub summary: Stats,
    pub torrents: Vec<Torrent>,
}

impl TorrentList {
    #[must_use]
    pub fn new(metrics: TorrentsMetrics, views: Vec<TorrentView>) -> Self {
        Self {
            summary: Stats::from(metrics),
            torrents: views.into_iter().map(Torrent::from).collect(),
        }
    }
}

/// The result of adding a torrent.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct AddedTorrent {
    pub info_hash: String,
}

impl From<InfoHash> for AddedTorrent {
    fn from(info_hash: InfoHash) -> Self {
        Self {
            info_hash: info_hash.to_string(),
        }
    }
}

/// The result of pausing or resuming a torrent.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct StatusChange {
    pub info_hash: String,
    pub status: TorrentStatus,
}

impl StatusChange {
    #[must_use]
    pub fn new(info_hash: &InfoHash, status: TorrentStatus) -> Self {
        Self {
            info_hash: info_hash.to_string(),
            status,
        }
    }
}
