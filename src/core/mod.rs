//! The core `node` module contains the swarm bookkeeping logic, independent of
//! the delivery layer.
//!
//! ```text
//! Delivery layer        Domain layer
//!
//!   Status HTTP API |
//!    Cleanup job    |> Node ─┬─ SwarmRegistry (authoritative state)
//!  Transfer engine  |        └─ StatusAggregator (read-only projections)
//! ```
//!
//! # Node
//!
//! The [`Node`] is the single entry point for every caller. It owns the
//! [`SwarmRegistry`] and the [`StatusAggregator`] and is shared behind an
//! `Arc`. It has three groups of responsibilities:
//!
//! - **Torrents**: adding torrents (from a magnet link or an already parsed
//!   descriptor), completing their metainfo, removing them, and pausing or
//!   resuming them.
//! - **Swarm events**: the transfer engine reports peers joining, leaving or
//!   changing, and the bytes transferred.
//! - **Status**: copies of the state and the projections the dashboard and
//!   the API render.
//!
//! Adding a torrent from a magnet link:
//!
//! ```rust,no_run
//! use torrust_swarm::core::Node;
//! use torrust_swarm_configuration::Core;
//! use torrust_swarm_primitives::torrent::Metainfo;
//!
//! let node = Node::new(&Core::default());
//!
//! let info_hash = node
//!     .add_magnet(
//!         "magnet:?xt=urn:btih:3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0&dn=sample",
//!         Metainfo::new(1024, vec![]),
//!     )
//!     .unwrap();
//!
//! node.pause(&info_hash).unwrap();
//! node.resume(&info_hash).unwrap();
//! ```
//!
//! # Peers
//!
//! Peer records are replaced as a whole. The node stamps every upserted
//! record with the current time, and [`Node::cleanup_peers`] drops the peers
//! that have not been updated for `core.max_peer_timeout` seconds.
//!
//! # Errors
//!
//! Every operation returns a typed [`Error`] instead of a partial result. See
//! the [`error`] module.
pub mod error;
pub mod services;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use torrust_swarm_clock::clock::Time;
use torrust_swarm_configuration::Core;
use torrust_swarm_magnet::{self as magnet, MagnetDescriptor};
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::peer::{self, PeerRecord};
use torrust_swarm_primitives::swarm_metadata::SwarmMetadata;
use torrust_swarm_primitives::torrent::{Metainfo, TorrentStatus};
use torrust_swarm_primitives::torrent_metrics::TorrentsMetrics;
use torrust_swarm_primitives::NumberOfBytes;
use torrust_swarm_registry::repository::Repository;
use torrust_swarm_registry::{EntrySingle, SwarmRegistry};
use tracing::{debug, info};

use self::error::Error;
use self::services::status::{StatusAggregator, TorrentView};
use crate::CurrentClock;

/// The domain layer node service.
pub struct Node {
    /// The authoritative swarm state.
    pub registry: Arc<SwarmRegistry>,
    aggregator: StatusAggregator,
    max_peer_timeout: Duration,
}

impl Node {
    #[must_use]
    pub fn new(config: &Core) -> Node {
        let registry = Arc::new(SwarmRegistry::new(config));

        Node {
            aggregator: StatusAggregator::new(registry.clone(), config),
            registry,
            max_peer_timeout: config.max_peer_timeout(),
        }
    }

    /// Registers a torrent from an already parsed descriptor.
    ///
    /// # Errors
    ///
    /// Will return an error if the torrent is already registered or the
    /// metainfo is inconsistent.
    pub fn add(&self, descriptor: &MagnetDescriptor, metainfo: Metainfo) -> Result<InfoHash, Error> {
        let info_hash = self.registry.add(descriptor, metainfo)?;

        info!(%info_hash, name = ?descriptor.name, "torrent added");

        Ok(info_hash)
    }

    /// Parses a magnet link and registers the torrent.
    ///
    /// # Errors
    ///
    /// Will return an error if the link can not be parsed, the torrent is
    /// already registered or the metainfo is inconsistent.
    pub fn add_magnet(&self, link: &str, metainfo: Metainfo) -> Result<InfoHash, Error> {
        let descriptor = magnet::parse(link)?;

        self.add(&descriptor, metainfo)
    }

    /// Adds several magnet links. The metainfo of these torrents is not
    /// known yet: see [`Node::set_metainfo`]. There is one result per link,
    /// in the same order.
    pub fn add_many<S: AsRef<str>>(&self, links: &[S]) -> Vec<Result<InfoHash, Error>> {
        links
            .iter()
            .map(|link| self.add_magnet(link.as_ref(), Metainfo::unknown()))
            .collect()
    }

    /// Gives a torrent the metainfo it was added without. Only allowed
    /// before its first downloaded byte.
    ///
    /// # Errors
    ///
    /// Will return an error if the torrent is not registered, the metainfo
    /// is inconsistent or the download has already started.
    pub fn set_metainfo(&self, info_hash: &InfoHash, metainfo: Metainfo) -> Result<(), Error> {
        self.registry.set_metainfo(info_hash, metainfo)?;

        info!(%info_hash, "torrent metainfo set");

        Ok(())
    }

    /// Deletes a torrent and all its peers.
    ///
    /// # Errors
    ///
    /// Will return an error if the torrent is not registered.
    pub fn remove(&self, info_hash: &InfoHash) -> Result<EntrySingle, Error> {
        let removed = self.registry.remove(info_hash)?;

        self.aggregator.forget(info_hash);

        info!(%info_hash, "torrent removed");

        Ok(removed)
    }

    /// # Errors
    ///
    /// Will return an error if the torrent is not registered or it is
    /// already paused.
    pub fn pause(&self, info_hash: &InfoHash) -> Result<TorrentStatus, Error> {
        let status = self.registry.set_status(info_hash, TorrentStatus::Paused)?;

        info!(%info_hash, "torrent paused");

        Ok(status)
    }

    /// Resumes a paused torrent. It goes back to `Started`, or to `Seeding`
    /// if the download is complete.
    ///
    /// # Errors
    ///
    /// Will return an error if the torrent is not registered or it is not
    /// paused.
    pub fn resume(&self, info_hash: &InfoHash) -> Result<TorrentStatus, Error> {
        let status = self.registry.set_status(info_hash, TorrentStatus::Started)?;

        info!(%info_hash, %status, "torrent resumed");

        Ok(status)
    }

    /// Pauses every torrent that is not paused yet. Returns how many torrents
    /// were paused.
    pub fn pause_all(&self) -> usize {
        let mut paused = 0;

        for info_hash in self.registry.info_hashes() {
            match self.registry.set_status(&info_hash, TorrentStatus::Paused) {
                Ok(_) => paused += 1,
                Err(err) => debug!(%info_hash, %err, "torrent not paused"),
            }
        }

        info!(paused, "all torrents paused");

        paused
    }

    /// Inserts or replaces a peer of a torrent. The record is stamped with
    /// the current time.
    ///
    /// # Errors
    ///
    /// Will return an error if the torrent is not registered.
    pub fn upsert_peer(&self, info_hash: &InfoHash, mut peer: PeerRecord) -> Result<SwarmMetadata, Error> {
        peer.updated = CurrentClock::now();

        Ok(self.registry.upsert_peer(info_hash, &peer)?)
    }

    /// # Errors
    ///
    /// Will return an error if the torrent or the peer is not registered.
    pub fn remove_peer(&self, info_hash: &InfoHash, peer_id: &peer::Id) -> Result<PeerRecord, Error> {
        Ok(self.registry.remove_peer(info_hash, peer_id)?)
    }

    /// Adds the bytes transferred since the last report.
    ///
    /// # Errors
    ///
    /// Will return an error if the torrent is not registered.
    pub fn update_transfer(
        &self,
        info_hash: &InfoHash,
        downloaded_delta: NumberOfBytes,
        uploaded_delta: NumberOfBytes,
    ) -> Result<TorrentStatus, Error> {
        let status = self.registry.update_transfer(info_hash, downloaded_delta, uploaded_delta)?;

        if status == TorrentStatus::Completed {
            debug!(%info_hash, "torrent download completed");
        }

        Ok(status)
    }

    /// A copy of every torrent.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<InfoHash, EntrySingle> {
        self.registry.snapshot()
    }

    #[must_use]
    pub fn global_summary(&self) -> TorrentsMetrics {
        self.aggregator.global_summary()
    }

    #[must_use]
    pub fn per_torrent_view(&self, info_hash: &InfoHash) -> Option<TorrentView> {
        self.aggregator.per_torrent_view(info_hash)
    }

    #[must_use]
    pub fn all_torrent_views(&self) -> Vec<TorrentView> {
        self.aggregator.all_torrent_views()
    }

    /// The global summary and all the torrent views, from one snapshot.
    #[must_use]
    pub fn overview(&self) -> (TorrentsMetrics, Vec<TorrentView>) {
        self.aggregator.overview()
    }

    /// Removes the peers that have not been updated within the peer timeout.
    /// Returns how many peers were removed.
    pub fn cleanup_peers(&self) -> usize {
        let current_cutoff = CurrentClock::now_sub(&self.max_peer_timeout).unwrap_or_default();

        let removed = self.registry.remove_inactive_peers(current_cutoff);

        info!(removed, "inactive peers removed");

        removed
    }
}
