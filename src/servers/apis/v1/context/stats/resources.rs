//! API resources for the [`stats`](crate::servers::apis::v1::context::stats)
//! API context.
use serde::{Deserialize, Serialize};
use torrust_swarm_primitives::torrent_metrics::TorrentsMetrics;

/// It contains all the statistics generated by the node.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Default, Clone, Copy)]
pub struct Stats {
    /// Number of torrents registered in the node.
    pub torrents: u64,
    /// Number of peers connected, in all the torrents.
    pub peers: u64,
    /// Peers holding every piece of their torrent.
    pub seeders: u64,
    /// Peers still missing pieces.
    pub leechers: u64,
}

impl From<TorrentsMetrics> for Stats {
    fn from(metrics: TorrentsMetrics) -> Self {
        Self {
            torrents: metrics.torrents,
            peers: metrics.peers,
            seeders: metrics.seeders,
            leechers: metrics.leechers,
        }
    }
}
