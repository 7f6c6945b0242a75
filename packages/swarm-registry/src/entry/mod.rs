use std::collections::BTreeMap;

use torrust_swarm_magnet::MagnetDescriptor;
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::peer::{self, PeerRecord};
use torrust_swarm_primitives::swarm_metadata::SwarmMetadata;
use torrust_swarm_primitives::torrent::{TorrentFile, TorrentStatus};
use torrust_swarm_primitives::{DurationSinceUnixEpoch, NumberOfBytes};

use crate::error::Error;

pub mod mutex_parking_lot;
pub mod single;

pub trait Entry {
    /// It returns the swarm metadata (statistics) as a struct:
    ///
    /// `(seeders, leechers)`
    fn get_swarm_metadata(&self) -> SwarmMetadata;

    /// It inserts or replaces the record of a peer and returns the swarm
    /// metadata after the change.
    fn upsert_peer(&mut self, peer: &PeerRecord) -> SwarmMetadata;

    /// It removes a peer and returns its last record, if it was known.
    fn remove_peer(&mut self, peer_id: &peer::Id) -> Option<PeerRecord>;

    /// It removes the peers not updated after `current_cutoff` and returns how
    /// many were removed.
    fn remove_inactive_peers(&mut self, current_cutoff: DurationSinceUnixEpoch) -> usize;

    /// It advances the cumulative transfer counters and takes the automatic
    /// status transitions. Returns the status after the update.
    fn update_transfer(&mut self, downloaded_delta: NumberOfBytes, uploaded_delta: NumberOfBytes) -> TorrentStatus;

    /// It applies a caller requested status change and returns the new
    /// status.
    ///
    /// # Errors
    ///
    /// Will return [`Error::InvalidTransition`] if the change is not allowed
    /// from the current status.
    fn set_status(&mut self, target: TorrentStatus) -> Result<TorrentStatus, Error>;

    /// It replaces what is known about the content of the torrent. The values
    /// must be already checked against each other.
    ///
    /// # Errors
    ///
    /// Will return [`Error::MetainfoLocked`] once any byte has been counted
    /// as downloaded.
    fn set_metainfo(&mut self, total_size: NumberOfBytes, piece_length: NumberOfBytes, files: Vec<TorrentFile>) -> Result<(), Error>;
}

#[allow(clippy::module_name_repetitions)]
pub trait EntrySync {
    fn get_swarm_metadata(&self) -> SwarmMetadata;
    fn get_copy(&self) -> TorrentSwarmState;
    fn upsert_peer(&self, peer: &PeerRecord) -> SwarmMetadata;
    fn remove_peer(&self, peer_id: &peer::Id) -> Option<PeerRecord>;
    fn remove_inactive_peers(&self, current_cutoff: DurationSinceUnixEpoch) -> usize;
    fn update_transfer(&self, downloaded_delta: NumberOfBytes, uploaded_delta: NumberOfBytes) -> TorrentStatus;
    /// # Errors
    ///
    /// See [`Entry::set_status`].
    fn set_status(&self, target: TorrentStatus) -> Result<TorrentStatus, Error>;
    /// # Errors
    ///
    /// See [`Entry::set_metainfo`].
    fn set_metainfo(&self, total_size: NumberOfBytes, piece_length: NumberOfBytes, files: Vec<TorrentFile>) -> Result<(), Error>;
}

/// Everything the node knows about one torrent.
///
/// `left` is not stored: it is always `total_size - downloaded`, and
/// `downloaded` never exceeds `total_size`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TorrentSwarmState {
    pub(crate) info_hash: InfoHash,
    pub(crate) display_name: String,
    pub(crate) total_size: NumberOfBytes,
    pub(crate) piece_length: NumberOfBytes,
    pub(crate) files: Vec<TorrentFile>,
    pub(crate) trackers: Vec<String>,
    pub(crate) status: TorrentStatus,
    pub(crate) downloaded: NumberOfBytes,
    pub(crate) uploaded: NumberOfBytes,
    /// The swarm: the peers connected for this torrent, keyed by peer id.
    pub(crate) peers: BTreeMap<peer::Id, PeerRecord>,
    pub(crate) added: DurationSinceUnixEpoch,
}

impl TorrentSwarmState {
    /// A new torrent in the `Started` status with no peers and no transfer.
    ///
    /// The display name falls back to the hex info-hash when the link has no
    /// name. A zero `piece_length` is raised to one byte.
    #[must_use]
    pub fn new(
        descriptor: &MagnetDescriptor,
        total_size: NumberOfBytes,
        piece_length: NumberOfBytes,
        files: Vec<TorrentFile>,
        added: DurationSinceUnixEpoch,
    ) -> Self {
        Self {
            info_hash: descriptor.info_hash,
            display_name: descriptor
                .name
                .clone()
                .unwrap_or_else(|| descriptor.info_hash.to_hex_string()),
            total_size,
            piece_length: piece_length.max(1),
            files,
            trackers: descriptor.trackers.clone(),
            status: TorrentStatus::Started,
            downloaded: 0,
            uploaded: 0,
            peers: BTreeMap::new(),
            added,
        }
    }

    #[must_use]
    pub fn info_hash(&self) -> InfoHash {
        self.info_hash
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn total_size(&self) -> NumberOfBytes {
        self.total_size
    }

    #[must_use]
    pub fn piece_length(&self) -> NumberOfBytes {
        self.piece_length
    }

    #[must_use]
    pub fn files(&self) -> &[TorrentFile] {
        &self.files
    }

    #[must_use]
    pub fn trackers(&self) -> &[String] {
        &self.trackers
    }

    #[must_use]
    pub fn status(&self) -> TorrentStatus {
        self.status
    }

    #[must_use]
    pub fn downloaded(&self) -> NumberOfBytes {
        self.downloaded
    }

    #[must_use]
    pub fn uploaded(&self) -> NumberOfBytes {
        self.uploaded
    }

    #[must_use]
    pub fn left(&self) -> NumberOfBytes {
        self.total_size - self.downloaded
    }

    #[must_use]
    pub fn added(&self) -> DurationSinceUnixEpoch {
        self.added
    }

    /// The peers of the swarm, ordered by peer id.
    pub fn peers(&self) -> impl Iterator<Item = &PeerRecord> {
        self.peers.values()
    }

    /// A torrent of unknown (zero) size is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total_size > 0 && self.downloaded == self.total_size
    }

    /// Number of pieces: `total_size / piece_length` rounded up.
    #[must_use]
    pub fn piece_count(&self) -> u32 {
        u32::try_from(self.total_size.div_ceil(self.piece_length)).unwrap_or(u32::MAX)
    }

    /// Download progress as a percentage in `[0, 100]`. An empty torrent has
    /// zero progress.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_size == 0 {
            return 0.0;
        }

        (self.downloaded as f64 / self.total_size as f64 * 100.0).clamp(0.0, 100.0)
    }
}
