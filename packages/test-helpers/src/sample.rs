//! Well known sample data.
use std::str::FromStr;

use torrust_swarm_primitives::info_hash::InfoHash;

/// Info-hash of the sample torrent.
pub const SAMPLE_INFO_HASH: &str = "3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0";

/// Magnet link of the sample torrent, with a name and one tracker.
pub const SAMPLE_MAGNET_LINK: &str = "magnet:?xt=urn:btih:3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0&dn=ubuntu-24.04-desktop-amd64.iso&tr=udp%3A%2F%2Ftracker.opentrackr.org%3A1337%2Fannounce";

/// # Panics
///
/// Will not panic: the sample info-hash is valid.
#[must_use]
pub fn sample_info_hash() -> InfoHash {
    InfoHash::from_str(SAMPLE_INFO_HASH).expect("the sample info-hash should be valid")
}

/// A magnet link without name or trackers for the given info-hash.
#[must_use]
pub fn magnet_link_for(info_hash: &InfoHash) -> String {
    format!("magnet:?xt=urn:btih:{info_hash}")
}
