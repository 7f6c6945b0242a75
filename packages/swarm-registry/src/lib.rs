//! The swarm registry: every torrent known to the node and, for each one, the
//! peers of its swarm, the transfer counters and the lifecycle status.
//!
//! The registry is the single authoritative copy of this state. Callers get
//! copies ([`EntrySingle`] values) and mutate only through the
//! [`Repository`](repository::Repository) operations.
//!
//! Locking has two levels:
//!
//! - The map of torrents is a [`DashMap`](dashmap::DashMap), so torrents in
//!   different shards never contend.
//! - Each torrent entry has its own [`parking_lot::Mutex`]. Every mutation of
//!   a torrent and every copy taken from it happens under that mutex, so a
//!   reader never sees a torrent in the middle of a mutation.
//!
//! Mutations keep the shard read guard while they hold the entry mutex.
//! Removing a torrent needs the shard write guard, so a removal is ordered
//! strictly before or after any mutation of the same torrent.
use std::sync::Arc;

use torrust_swarm_clock::clock;

pub mod entry;
pub mod error;
pub mod repository;

// Torrent Entry

pub type EntrySingle = entry::TorrentSwarmState;
pub type EntryMutexParkingLot = Arc<parking_lot::Mutex<EntrySingle>>;

// Repos

pub type SwarmRegistry = repository::dash_map_mutex_parking_lot::DashMapMutexParkingLot;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
