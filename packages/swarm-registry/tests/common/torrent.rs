use torrust_swarm_magnet::MagnetDescriptor;
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::torrent::Metainfo;

/// Piece length of the registries built for the tests.
pub const PIECE_LENGTH: u64 = 16_384;

/// A torrent of four pieces.
pub const TOTAL_SIZE: u64 = 4 * PIECE_LENGTH;

/// A distinct info-hash for every number.
#[must_use]
pub fn info_hash(number: u32) -> InfoHash {
    let mut bytes = [0u8; 20];
    bytes[16..].copy_from_slice(&number.to_be_bytes());
    InfoHash(bytes)
}

#[must_use]
pub fn descriptor(number: u32) -> MagnetDescriptor {
    let mut descriptor = MagnetDescriptor::new(info_hash(number));
    descriptor.name = Some(format!("torrent-{number}"));
    descriptor.trackers = vec!["udp://tracker.example:6969/announce".to_owned()];
    descriptor
}

/// The metainfo of a torrent of [`TOTAL_SIZE`] bytes, without files.
#[must_use]
pub fn metainfo() -> Metainfo {
    Metainfo::new(TOTAL_SIZE, vec![])
}
