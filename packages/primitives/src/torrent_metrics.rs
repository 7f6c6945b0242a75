use std::ops::AddAssign;

use serde::Serialize;

use crate::swarm_metadata::SwarmMetadata;

/// Aggregate counters for all the torrents in the registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct TorrentsMetrics {
    /// Total number of torrents.
    pub torrents: u64,
    /// Total number of peers for all torrents.
    pub peers: u64,
    /// Total number of seeders for all torrents.
    pub seeders: u64,
    /// Total number of leechers for all torrents.
    pub leechers: u64,
}

impl TorrentsMetrics {
    /// Adds one torrent with the given swarm counters.
    pub fn add_torrent(&mut self, swarm: &SwarmMetadata) {
        self.torrents += 1;
        self.peers += u64::from(swarm.peers());
        self.seeders += u64::from(swarm.seeders);
        self.leechers += u64::from(swarm.leechers);
    }
}

impl AddAssign for TorrentsMetrics {
    fn add_assign(&mut self, rhs: Self) {
        self.torrents += rhs.torrents;
        self.peers += rhs.peers;
        self.seeders += rhs.seeders;
        self.leechers += rhs.leechers;
    }
}
