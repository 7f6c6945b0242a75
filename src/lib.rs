//! **Torrust Swarm** is the swarm bookkeeping core of a `BitTorrent` node.
//!
//! It keeps, for every torrent the node is sharing, the peers of its swarm,
//! the transfer counters and the lifecycle status, and it serves consistent
//! point-in-time views of that state to a dashboard or an HTTP API.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Architecture](#architecture)
//! - [Configuration](#configuration)
//! - [Usage](#usage)
//! - [Components](#components)
//!
//! # Features
//!
//! - Magnet links: parsing (hex and base32 info-hashes) and construction.
//! - A concurrent registry of torrents with per-torrent locking. Readers get
//!   copies and never see a torrent in the middle of a mutation.
//! - A torrent status state machine: `started`, `paused`, `completed` and `seeding`.
//! - Derived counters (seeders, leechers, progress) and transfer speeds.
//! - A JSON status API to list, add, remove, pause and resume torrents.
//! - Periodic removal of the peers that stopped reporting.
//!
//! # Architecture
//!
//! ```text
//! Delivery layer         Domain layer                Packages
//!
//!   Status API  ┐
//!               ├──> core::Node ──> SwarmRegistry   (torrust-swarm-registry)
//!  Cleanup job  ┘        │     └──> magnet::parse   (torrust-swarm-magnet)
//!                        └──> StatusAggregator
//! ```
//!
//! The transfer engine (piece exchange, networking, storage) is not part of
//! this crate. It reports into the [`Node`](crate::core::Node) with
//! [`upsert_peer`](crate::core::Node::upsert_peer),
//! [`remove_peer`](crate::core::Node::remove_peer) and
//! [`update_transfer`](crate::core::Node::update_transfer).
//!
//! # Configuration
//!
//! The configuration is loaded from a TOML file (by default
//! `./share/default/config/swarm.toml`) or from the `TORRUST_SWARM_CONFIG_TOML`
//! environment variable, and single values can be overridden with variables
//! like `TORRUST_SWARM_CORE__MAX_PEER_TIMEOUT=300`.
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [core]
//! piece_length = 524288
//! max_peer_timeout = 900
//! inactive_peer_cleanup_interval = 600
//! speed_sampling_window = 1
//!
//! [http_api]
//! enabled = true
//! bind_address = "127.0.0.1:1212"
//! ```
//!
//! Refer to the [`torrust-swarm-configuration`](torrust_swarm_configuration)
//! crate for the meaning of every option.
//!
//! # Usage
//!
//! ```text
//! cargo run
//! ```
//!
//! And then:
//!
//! ```text
//! curl -s http://127.0.0.1:1212/api/v1/torrents
//! ```
//!
//! # Components
//!
//! - [`core`]: the domain layer, the `Node` and its services.
//! - [`servers`]: the status API.
//! - [`bootstrap`]: configuration, logging and jobs.
//! - [`app`]: starts the jobs.
use torrust_swarm_clock::clock;

pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
