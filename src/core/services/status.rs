//! Read-only projections of the swarm registry for dashboards and the API.
//!
//! The [`StatusAggregator`] takes copies from the registry and turns them into
//! [`TorrentView`]s and [`TorrentsMetrics`]. Every derived value (progress,
//! seeders, speeds, swarm efficiency) is computed here from those copies and
//! never stored in the registry.
//!
//! Speeds are rates over a sampling window. The aggregator keeps, for each
//! torrent, the counters seen in the last sample. When a view is requested:
//!
//! - The first time, the speeds are zero and a sample is taken.
//! - Before the window has elapsed, the speeds of the last sample are reused.
//! - Otherwise the speeds are the counter deltas divided by the elapsed time,
//!   and the sample is replaced.
use std::collections::{BTreeMap, HashMap};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde::Serialize;
use torrust_swarm_clock::clock::Time;
use torrust_swarm_configuration::Core;
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::peer::{self, PeerRecord};
use torrust_swarm_primitives::torrent::{TorrentFile, TorrentStatus};
use torrust_swarm_primitives::torrent_metrics::TorrentsMetrics;
use torrust_swarm_primitives::{DurationSinceUnixEpoch, NumberOfBytes};
use torrust_swarm_registry::entry::Entry;
use torrust_swarm_registry::repository::Repository;
use torrust_swarm_registry::{EntrySingle, SwarmRegistry};
use tracing::debug;

use crate::CurrentClock;

/// Everything the node knows about one torrent, at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TorrentView {
    pub info_hash: InfoHash,
    pub name: String,
    pub status: TorrentStatus,
    /// Percentage in `[0, 100]`.
    pub progress: f64,
    pub downloaded: NumberOfBytes,
    pub uploaded: NumberOfBytes,
    pub left: NumberOfBytes,
    pub total_size: NumberOfBytes,
    pub piece_length: NumberOfBytes,
    pub piece_count: u32,
    pub connected_peers: usize,
    pub seeders: u32,
    pub leechers: u32,
    /// Bytes per second.
    pub download_speed: f64,
    /// Bytes per second.
    pub upload_speed: f64,
    /// Percentage in `[0, 100]`. See [`swarm_efficiency`].
    pub swarm_efficiency: f64,
    pub files: Vec<TorrentFile>,
    pub trackers: Vec<String>,
    /// Ordered by peer id.
    pub peers: Vec<PeerView>,
}

/// One peer of a [`TorrentView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeerView {
    pub peer_id: peer::Id,
    pub address: SocketAddr,
    pub pieces_held: u32,
    /// Share of the pieces the peer holds, as a percentage.
    pub progress: f64,
    pub seeder: bool,
    pub peer_choking: bool,
    pub peer_interested: bool,
    #[serde(serialize_with = "peer::ser_unix_time_value")]
    pub updated: DurationSinceUnixEpoch,
}

impl PeerView {
    fn new(peer: &PeerRecord, piece_count: u32) -> Self {
        let progress = if piece_count == 0 {
            0.0
        } else {
            (f64::from(peer.pieces_held) / f64::from(piece_count) * 100.0).clamp(0.0, 100.0)
        };

        Self {
            peer_id: peer.peer_id,
            address: peer.peer_addr,
            pieces_held: peer.pieces_held,
            progress,
            seeder: peer.is_seeder(piece_count),
            peer_choking: peer.peer_choking,
            peer_interested: peer.peer_interested,
            updated: peer.updated,
        }
    }
}

/// Transfer speeds in bytes per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Speeds {
    pub download: f64,
    pub upload: f64,
}

/// The counters of a torrent the last time its speeds were computed.
#[derive(Debug, Clone, Copy)]
struct Sample {
    taken_at: DurationSinceUnixEpoch,
    downloaded: NumberOfBytes,
    uploaded: NumberOfBytes,
    speeds: Speeds,
}

pub struct StatusAggregator {
    registry: Arc<SwarmRegistry>,
    sampling_window: Duration,
    samples: Mutex<HashMap<InfoHash, Sample>>,
}

impl StatusAggregator {
    #[must_use]
    pub fn new(registry: Arc<SwarmRegistry>, config: &Core) -> Self {
        Self {
            registry,
            sampling_window: config.speed_sampling_window(),
            samples: Mutex::new(HashMap::new()),
        }
    }

    /// Totals for all the torrents.
    #[must_use]
    pub fn global_summary(&self) -> TorrentsMetrics {
        self.registry.get_metrics()
    }

    /// The view of one torrent, or `None` if it is not registered.
    #[must_use]
    pub fn per_torrent_view(&self, info_hash: &InfoHash) -> Option<TorrentView> {
        let entry = self.registry.get(info_hash)?;

        Some(self.project(&entry, CurrentClock::now()))
    }

    /// The views of all the torrents, ordered by info-hash.
    ///
    /// Samples of torrents that are no longer registered are discarded.
    #[must_use]
    pub fn all_torrent_views(&self) -> Vec<TorrentView> {
        let snapshot = self.registry.snapshot();

        self.prune(&snapshot);

        let now = CurrentClock::now();

        snapshot.values().map(|entry| self.project(entry, now)).collect()
    }

    /// The global summary and every view, taken from the same snapshot.
    #[must_use]
    pub fn overview(&self) -> (TorrentsMetrics, Vec<TorrentView>) {
        let snapshot = self.registry.snapshot();

        self.prune(&snapshot);

        let now = CurrentClock::now();

        let mut metrics = TorrentsMetrics::default();
        let mut views = Vec::with_capacity(snapshot.len());

        for entry in snapshot.values() {
            metrics.add_torrent(&entry.get_swarm_metadata());
            views.push(self.project(entry, now));
        }

        (metrics, views)
    }

    /// Drops the speed sample of a torrent.
    pub fn forget(&self, info_hash: &InfoHash) {
        self.samples.lock().remove(info_hash);
    }

    /// Number of torrents with a cached speed sample.
    #[must_use]
    pub fn sampled_torrents(&self) -> usize {
        self.samples.lock().len()
    }

    fn prune(&self, snapshot: &BTreeMap<InfoHash, EntrySingle>) {
        let mut samples = self.samples.lock();
        let before = samples.len();

        samples.retain(|info_hash, _| snapshot.contains_key(info_hash));

        if samples.len() < before {
            debug!(pruned = before - samples.len(), "speed samples of removed torrents discarded");
        }
    }

    fn project(&self, entry: &EntrySingle, now: DurationSinceUnixEpoch) -> TorrentView {
        let swarm = entry.get_swarm_metadata();
        let piece_count = entry.piece_count();
        let peers: Vec<PeerView> = entry.peers().map(|peer| PeerView::new(peer, piece_count)).collect();
        let speeds = self.speeds(entry, now);

        TorrentView {
            info_hash: entry.info_hash(),
            name: entry.display_name().to_owned(),
            status: entry.status(),
            progress: entry.progress(),
            downloaded: entry.downloaded(),
            uploaded: entry.uploaded(),
            left: entry.left(),
            total_size: entry.total_size(),
            piece_length: entry.piece_length(),
            piece_count,
            connected_peers: peers.len(),
            seeders: swarm.seeders,
            leechers: swarm.leechers,
            download_speed: speeds.download,
            upload_speed: speeds.upload,
            swarm_efficiency: swarm_efficiency(speeds.download, peers.len(), entry.piece_length()),
            files: entry.files().to_vec(),
            trackers: entry.trackers().to_vec(),
            peers,
        }
    }

    /// Samples are only stored for registered torrents. The check runs under
    /// the samples lock, so a concurrent [`forget`](Self::forget) always runs
    /// after any insert for the removed torrent.
    fn speeds(&self, entry: &EntrySingle, now: DurationSinceUnixEpoch) -> Speeds {
        let info_hash = entry.info_hash();
        let mut samples = self.samples.lock();

        let fresh = Sample {
            taken_at: now,
            downloaded: entry.downloaded(),
            uploaded: entry.uploaded(),
            speeds: Speeds::default(),
        };

        let Some(previous) = samples.get(&info_hash).copied() else {
            if self.is_registered(&info_hash) {
                samples.insert(info_hash, fresh);
            }
            return fresh.speeds;
        };

        let elapsed = now.saturating_sub(previous.taken_at);

        if elapsed.is_zero() || elapsed < self.sampling_window {
            return previous.speeds;
        }

        let seconds = elapsed.as_secs_f64();

        #[allow(clippy::cast_precision_loss)]
        let speeds = Speeds {
            download: fresh.downloaded.saturating_sub(previous.downloaded) as f64 / seconds,
            upload: fresh.uploaded.saturating_sub(previous.uploaded) as f64 / seconds,
        };

        if self.is_registered(&info_hash) {
            samples.insert(info_hash, Sample { speeds, ..fresh });
        }

        speeds
    }

    fn is_registered(&self, info_hash: &InfoHash) -> bool {
        self.registry.get_swarm_metadata(info_hash).is_some()
    }
}

/// How close the download speed is to what the swarm could deliver, as a
/// percentage rounded to one decimal.
///
/// Each connected peer is expected to deliver a tenth of a piece per second.
/// With one peer or none the efficiency is zero.
#[must_use]
pub fn swarm_efficiency(download_speed: f64, connected_peers: usize, piece_length: NumberOfBytes) -> f64 {
    if connected_peers <= 1 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let theoretical_max = connected_peers as f64 * piece_length as f64 / 10.0;

    if theoretical_max <= 0.0 {
        return 0.0;
    }

    let efficiency = (download_speed / theoretical_max * 100.0).min(100.0);

    (efficiency * 10.0).round() / 10.0
}
