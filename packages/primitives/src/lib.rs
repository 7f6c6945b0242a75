//! Primitive types for the Torrust swarm packages.
//!
//! This crate contains the basic data structures shared by the magnet codec,
//! the swarm registry and the status projections: the torrent identifier
//! ([`InfoHash`](info_hash::InfoHash)), the peer record, the torrent status
//! and the derived swarm counters.
use std::time::Duration;

pub mod info_hash;
pub mod peer;
pub mod swarm_metadata;
pub mod torrent;
pub mod torrent_metrics;

/// Duration since the Unix Epoch.
pub type DurationSinceUnixEpoch = Duration;

/// Number of bytes: sizes and transfer counters.
pub type NumberOfBytes = u64;
