//! Peer record kept by the swarm registry.
//!
//! A sample peer:
//!
//! ```rust,no_run
//! use std::net::{IpAddr, Ipv4Addr, SocketAddr};
//!
//! use torrust_swarm_primitives::peer;
//! use torrust_swarm_primitives::DurationSinceUnixEpoch;
//!
//! peer::PeerRecord {
//!     peer_id: peer::Id(*b"-qB00000000000000000"),
//!     peer_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(126, 0, 0, 1)), 8080),
//!     pieces_held: 12,
//!     peer_choking: true,
//!     peer_interested: false,
//!     updated: DurationSinceUnixEpoch::new(1_669_397_478_934, 0),
//! };
//! ```
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::Serialize;

use crate::DurationSinceUnixEpoch;

/// The relationship between one remote peer and one torrent.
///
/// Records are owned by the registry entry of their torrent. They are
/// replaced as a whole on every update, never mutated in place by callers.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub struct PeerRecord {
    /// ID announced by the remote peer
    pub peer_id: Id,
    /// The IP and port this peer is listening on
    pub peer_addr: SocketAddr,
    /// Number of pieces the peer has announced it holds
    pub pieces_held: u32,
    /// The remote peer is choking us
    pub peer_choking: bool,
    /// The remote peer is interested in our pieces
    pub peer_interested: bool,
    /// The last time an event was reported for this peer (timestamp)
    #[serde(serialize_with = "ser_unix_time_value")]
    pub updated: DurationSinceUnixEpoch,
}

impl Default for PeerRecord {
    fn default() -> Self {
        Self {
            peer_id: Id::default(),
            peer_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            pieces_held: 0,
            peer_choking: true,
            peer_interested: false,
            updated: DurationSinceUnixEpoch::ZERO,
        }
    }
}

impl PeerRecord {
    /// A peer is a seeder when it holds every piece of the torrent. Nobody
    /// is a seeder while the piece count is unknown (zero).
    #[must_use]
    pub fn is_seeder(&self, piece_count: u32) -> bool {
        piece_count > 0 && self.pieces_held >= piece_count
    }
}

/// Serializes a `DurationSinceUnixEpoch` as a Unix timestamp in milliseconds.
/// # Errors
///
/// Will return `serde::Serializer::Error` if unable to serialize the `unix_time_value`.
pub fn ser_unix_time_value<S: serde::Serializer>(unix_time_value: &DurationSinceUnixEpoch, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_u64(u64::try_from(unix_time_value.as_millis()).unwrap_or(u64::MAX))
}

/// Peer ID. A 20-byte array.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord, Default)]
pub struct Id(pub [u8; 20]);

pub const PEER_ID_BYTES_LEN: usize = 20;

impl Id {
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut chars = [0u8; PEER_ID_BYTES_LEN * 2];
        let hex = binascii::bin2hex(&self.0, &mut chars).map_err(|_| std::fmt::Error)?;
        f.write_str(std::str::from_utf8(hex).map_err(|_| std::fmt::Error)?)
    }
}

impl From<[u8; 20]> for Id {
    fn from(bytes: [u8; 20]) -> Self {
        Id(bytes)
    }
}

impl From<i32> for Id {
    fn from(number: i32) -> Self {
        let number = number.to_le_bytes();
        let mut bytes = [0u8; PEER_ID_BYTES_LEN];
        bytes[PEER_ID_BYTES_LEN - 4..].copy_from_slice(&number);
        Id(bytes)
    }
}

impl Serialize for Id {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
