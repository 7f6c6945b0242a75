//! Errors returned by the [`Node`](crate::core::Node).
//!
//! Error | Origin | Description
//! ---|---|---
//! `Magnet` | Magnet codec | The link is not a magnet link or it has no valid info-hash.
//! `Registry` | Swarm registry | The torrent (or peer) already exists, does not exist, or can not change to the requested status.
//!
use torrust_swarm_magnet as magnet;
use torrust_swarm_registry::error as registry;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("invalid magnet link: {source}")]
    Magnet {
        #[from]
        source: magnet::Error,
    },

    #[error("{source}")]
    Registry {
        #[from]
        source: registry::Error,
    },
}
