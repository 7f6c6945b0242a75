//! `Peer` API resource.
use serde::{Deserialize, Serialize};

use crate::core::services::status::PeerView;

/// `Peer` API resource.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Peer {
    /// The peer's ID in hex format. For example: `2d7142343431302d2a64465a3844484944704579`.
    pub peer_id: String,
    /// The peer's socket address. For example: `192.168.1.88:17548`.
    pub peer_addr: String,
    /// Number of pieces the peer holds.
    pub pieces_held: u32,
    /// Share of the pieces the peer holds, as a percentage.
    pub progress: f64,
    /// The peer holds every piece.
    pub seeder: bool,
    pub peer_choking: bool,
    pub peer_interested: bool,
    /// The peer's last update time in milliseconds since the Unix Epoch.
    pub updated: u128,
}

impl From<PeerView> for Peer {
    fn from(peer: PeerView) -> Self {
        Peer {
            peer_id: peer.peer_id.to_hex_string(),
            peer_addr: peer.address.to_string(),
            pieces_held: peer.pieces_held,
            progress: peer.progress,
            seeder: peer.seeder,
            peer_choking: peer.peer_choking,
            peer_interested: peer.peer_interested,
            updated: peer.updated.as_millis(),
        }
    }
}
