use derive_more::Constructor;
use serde::Serialize;

/// Swarm counters for one torrent.
///
/// They are never stored: the registry derives them from the peer list every
/// time they are requested.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Constructor)]
pub struct SwarmMetadata {
    /// The number of known peers holding every piece
    pub seeders: u32,
    /// The number of known peers still missing pieces
    pub leechers: u32,
}

impl SwarmMetadata {
    #[must_use]
    pub fn zeroed() -> Self {
        Self::default()
    }

    /// All known peers: seeders plus leechers.
    #[must_use]
    pub fn peers(&self) -> u32 {
        self.seeders + self.leechers
    }
}
