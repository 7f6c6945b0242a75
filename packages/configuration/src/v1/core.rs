use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default piece length for torrents added without metainfo: 512 KiB.
pub const DEFAULT_PIECE_LENGTH: u64 = 512 * 1024;

/// Swarm bookkeeping settings.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Core {
    /// Piece length in bytes assigned to every new torrent. The piece count
    /// of a torrent, and so whether a peer is a seeder, depends on it.
    #[serde(default = "Core::default_piece_length")]
    pub piece_length: u64,

    /// Maximum time in seconds that a peer can go without reporting an
    /// event before it is removed from the peer list of its torrent.
    #[serde(default = "Core::default_max_peer_timeout")]
    pub max_peer_timeout: u32,

    /// Interval in seconds that the cleanup job will run to remove inactive
    /// peers.
    #[serde(default = "Core::default_inactive_peer_cleanup_interval")]
    pub inactive_peer_cleanup_interval: u64,

    /// Minimum time in seconds between two speed samples of the same
    /// torrent. Views requested sooner reuse the last computed speeds.
    #[serde(default = "Core::default_speed_sampling_window")]
    pub speed_sampling_window: u64,
}

impl Default for Core {
    fn default() -> Self {
        Self {
            piece_length: Self::default_piece_length(),
            max_peer_timeout: Self::default_max_peer_timeout(),
            inactive_peer_cleanup_interval: Self::default_inactive_peer_cleanup_interval(),
            speed_sampling_window: Self::default_speed_sampling_window(),
        }
    }
}

impl Core {
    fn default_piece_length() -> u64 {
        DEFAULT_PIECE_LENGTH
    }

    fn default_max_peer_timeout() -> u32 {
        900
    }

    fn default_inactive_peer_cleanup_interval() -> u64 {
        600
    }

    fn default_speed_sampling_window() -> u64 {
        1
    }

    #[must_use]
    pub fn max_peer_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.max_peer_timeout))
    }

    #[must_use]
    pub fn inactive_peer_cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.inactive_peer_cleanup_interval)
    }

    #[must_use]
    pub fn speed_sampling_window(&self) -> Duration {
        Duration::from_secs(self.speed_sampling_window)
    }
}
