use std::collections::BTreeMap;

use torrust_swarm_magnet::MagnetDescriptor;
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::peer::{self, PeerRecord};
use torrust_swarm_primitives::swarm_metadata::SwarmMetadata;
use torrust_swarm_primitives::torrent::{Metainfo, TorrentStatus};
use torrust_swarm_primitives::torrent_metrics::TorrentsMetrics;
use torrust_swarm_primitives::{DurationSinceUnixEpoch, NumberOfBytes};

use crate::error::Error;
use crate::EntrySingle;

pub mod dash_map_mutex_parking_lot;

/// The operations of the swarm registry.
///
/// Every mutation either applies completely or returns an error without any
/// effect. Mutations of the same torrent are serialized. Mutations of
/// different torrents do not wait for each other.
pub trait Repository: Default + Send + Sync + 'static {
    /// Registers a new torrent in the `Started` status.
    ///
    /// A zero total size is taken from the files. The piece length falls back
    /// to the registry default.
    ///
    /// # Errors
    ///
    /// Will return [`Error::AlreadyExists`] if the info-hash is already
    /// registered, or [`Error::InvalidMetainfo`] if the total size does not
    /// match the files or the piece length is zero.
    fn add(&self, descriptor: &MagnetDescriptor, metainfo: Metainfo) -> Result<InfoHash, Error>;

    /// Replaces the metainfo of a torrent that has not downloaded anything
    /// yet, for torrents added before their metainfo was known. It is checked
    /// like in [`add`](Repository::add).
    ///
    /// # Errors
    ///
    /// Will return [`Error::NotFound`] if the torrent is not registered,
    /// [`Error::InvalidMetainfo`] if the metainfo is inconsistent, or
    /// [`Error::MetainfoLocked`] once the download has started.
    fn set_metainfo(&self, key: &InfoHash, metainfo: Metainfo) -> Result<(), Error>;

    /// Deletes a torrent with all its peers and returns its last state.
    ///
    /// # Errors
    ///
    /// Will return [`Error::NotFound`] if the torrent is not registered.
    fn remove(&self, key: &InfoHash) -> Result<EntrySingle, Error>;

    /// Inserts or replaces the record of a peer. Returns the swarm metadata
    /// after the change.
    ///
    /// # Errors
    ///
    /// Will return [`Error::NotFound`] if the torrent is not registered.
    fn upsert_peer(&self, key: &InfoHash, peer: &PeerRecord) -> Result<SwarmMetadata, Error>;

    /// Removes the record of a peer and returns it.
    ///
    /// # Errors
    ///
    /// Will return [`Error::NotFound`] if either the torrent or the peer is
    /// not registered.
    fn remove_peer(&self, key: &InfoHash, peer_id: &peer::Id) -> Result<PeerRecord, Error>;

    /// Advances the transfer counters of a torrent. Returns its status after
    /// the update.
    ///
    /// # Errors
    ///
    /// Will return [`Error::NotFound`] if the torrent is not registered.
    fn update_transfer(
        &self,
        key: &InfoHash,
        downloaded_delta: NumberOfBytes,
        uploaded_delta: NumberOfBytes,
    ) -> Result<TorrentStatus, Error>;

    /// Requests a status change. Returns the new status.
    ///
    /// # Errors
    ///
    /// Will return [`Error::NotFound`] if the torrent is not registered, or
    /// [`Error::InvalidTransition`] if the change is not allowed.
    fn set_status(&self, key: &InfoHash, target: TorrentStatus) -> Result<TorrentStatus, Error>;

    /// Removes, from every torrent, the peers not updated after
    /// `current_cutoff`. Returns how many peers were removed.
    fn remove_inactive_peers(&self, current_cutoff: DurationSinceUnixEpoch) -> usize;

    /// A copy of one torrent.
    fn get(&self, key: &InfoHash) -> Option<EntrySingle>;

    fn get_swarm_metadata(&self, key: &InfoHash) -> Option<SwarmMetadata>;

    /// Totals for all the torrents.
    fn get_metrics(&self) -> TorrentsMetrics;

    /// A copy of every torrent. Each torrent is copied atomically.
    fn snapshot(&self) -> BTreeMap<InfoHash, EntrySingle>;

    /// The info-hashes of all the registered torrents.
    fn info_hashes(&self) -> Vec<InfoHash>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
