use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::peer::{self, PeerRecord};
use torrust_swarm_primitives::torrent::Metainfo;
use torrust_swarm_test_helpers::configuration::TEST_PIECE_LENGTH;

/// Four pieces with the test piece length.
pub const TOTAL_SIZE: u64 = 4 * TEST_PIECE_LENGTH;

/// The metainfo of a torrent of [`TOTAL_SIZE`] bytes, without files.
pub fn metainfo() -> Metainfo {
    Metainfo::new(TOTAL_SIZE, vec![])
}

/// A magnet link for an info-hash, with a name and no trackers.
pub fn magnet_link(info_hash: &InfoHash, name: &str) -> String {
    format!("magnet:?xt=urn:btih:{info_hash}&dn={name}")
}

/// A peer of the swarm holding `pieces_held` pieces.
pub fn peer(id: i32, pieces_held: u32) -> PeerRecord {
    PeerRecord {
        peer_id: peer::Id::from(id),
        peer_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::new(126, 0, 0, 1)), 6000 + u16::try_from(id).unwrap_or(0)),
        pieces_held,
        ..PeerRecord::default()
    }
}

pub fn seeder(id: i32) -> PeerRecord {
    peer(id, 4)
}

pub fn leecher(id: i32) -> PeerRecord {
    peer(id, 1)
}
