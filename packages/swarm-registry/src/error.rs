//! Errors returned by the swarm registry.
//!
//! All of them are recoverable: the operation had no effect and the caller
//! decides how to report it.
use std::panic::Location;

use thiserror::Error;
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::peer;
use torrust_swarm_primitives::torrent::TorrentStatus;
use torrust_swarm_primitives::NumberOfBytes;

/// What was looked up and not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Torrent(InfoHash),
    Peer(InfoHash, peer::Id),
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Torrent(info_hash) => write!(f, "torrent {info_hash}"),
            Subject::Peer(info_hash, peer_id) => write!(f, "peer {peer_id} in torrent {info_hash}"),
        }
    }
}

/// Why a metainfo was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetainfoProblem {
    FilesSizeMismatch {
        total_size: NumberOfBytes,
        files_size: NumberOfBytes,
    },
    ZeroPieceLength,
}

impl std::fmt::Display for MetainfoProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetainfoProblem::FilesSizeMismatch { total_size, files_size } => {
                write!(f, "total size {total_size} does not match the {files_size} bytes of its files")
            }
            MetainfoProblem::ZeroPieceLength => f.write_str("piece length is zero"),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("torrent {info_hash} is already registered, {location}")]
    AlreadyExists {
        info_hash: InfoHash,
        location: &'static Location<'static>,
    },

    #[error("{subject} not found, {location}")]
    NotFound {
        subject: Subject,
        location: &'static Location<'static>,
    },

    #[error("torrent {info_hash} can not change from {from} to {to}, {location}")]
    InvalidTransition {
        info_hash: InfoHash,
        from: TorrentStatus,
        to: TorrentStatus,
        location: &'static Location<'static>,
    },

    #[error("invalid metainfo for torrent {info_hash}: {problem}, {location}")]
    InvalidMetainfo {
        info_hash: InfoHash,
        problem: MetainfoProblem,
        location: &'static Location<'static>,
    },

    #[error("metainfo of torrent {info_hash} can not change after the download started, {location}")]
    MetainfoLocked {
        info_hash: InfoHash,
        location: &'static Location<'static>,
    },
}

impl Error {
    #[track_caller]
    #[must_use]
    pub fn torrent_not_found(info_hash: InfoHash) -> Self {
        Self::NotFound {
            subject: Subject::Torrent(info_hash),
            location: Location::caller(),
        }
    }

    #[track_caller]
    #[must_use]
    pub fn peer_not_found(info_hash: InfoHash, peer_id: peer::Id) -> Self {
        Self::NotFound {
            subject: Subject::Peer(info_hash, peer_id),
            location: Location::caller(),
        }
    }

    #[track_caller]
    #[must_use]
    pub fn invalid_metainfo(info_hash: InfoHash, problem: MetainfoProblem) -> Self {
        Self::InvalidMetainfo {
            info_hash,
            problem,
            location: Location::caller(),
        }
    }
}
