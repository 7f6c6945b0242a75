use std::collections::BTreeMap;
use std::panic::Location;

use dashmap::mapref::entry::Entry as MapEntry;
use dashmap::DashMap;
use torrust_swarm_clock::clock::Time;
use torrust_swarm_configuration::Core;
use torrust_swarm_magnet::MagnetDescriptor;
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::peer::{self, PeerRecord};
use torrust_swarm_primitives::swarm_metadata::SwarmMetadata;
use torrust_swarm_primitives::torrent::{Metainfo, TorrentStatus};
use torrust_swarm_primitives::torrent_metrics::TorrentsMetrics;
use torrust_swarm_primitives::{DurationSinceUnixEpoch, NumberOfBytes};
use tracing::debug;

use super::Repository;
use crate::entry::EntrySync;
use crate::error::{Error, MetainfoProblem, Subject};
use crate::{CurrentClock, EntryMutexParkingLot, EntrySingle};

/// Torrents in a [`DashMap`], each one behind its own `parking_lot` mutex.
#[derive(Debug)]
pub struct DashMapMutexParkingLot {
    pub torrents: DashMap<InfoHash, EntryMutexParkingLot>,
    piece_length: NumberOfBytes,
}

impl Default for DashMapMutexParkingLot {
    fn default() -> Self {
        Self::new(&Core::default())
    }
}

impl DashMapMutexParkingLot {
    #[must_use]
    pub fn new(config: &Core) -> Self {
        Self {
            torrents: DashMap::default(),
            piece_length: config.piece_length,
        }
    }

    /// Piece length of the torrents whose metainfo does not give one.
    #[must_use]
    pub fn piece_length(&self) -> NumberOfBytes {
        self.piece_length
    }

    /// Fills the total size and the piece length of a metainfo, and checks
    /// them against its files.
    #[track_caller]
    fn resolve(&self, info_hash: InfoHash, metainfo: Metainfo) -> Result<Metainfo, Error> {
        let files_size = metainfo.files_size();

        let total_size = match metainfo.total_size {
            0 => files_size,
            total_size if metainfo.files.is_empty() || total_size == files_size => total_size,
            total_size => {
                return Err(Error::invalid_metainfo(
                    info_hash,
                    MetainfoProblem::FilesSizeMismatch { total_size, files_size },
                ))
            }
        };

        let piece_length = match metainfo.piece_length {
            Some(0) => return Err(Error::invalid_metainfo(info_hash, MetainfoProblem::ZeroPieceLength)),
            Some(piece_length) => piece_length,
            None => self.piece_length,
        };

        Ok(Metainfo {
            total_size,
            piece_length: Some(piece_length),
            files: metainfo.files,
        })
    }
}

impl Repository for DashMapMutexParkingLot {
    #[track_caller]
    fn add(&self, descriptor: &MagnetDescriptor, metainfo: Metainfo) -> Result<InfoHash, Error> {
        let location = Location::caller();

        let Metainfo {
            total_size,
            piece_length,
            files,
        } = self.resolve(descriptor.info_hash, metainfo)?;
        let piece_length = piece_length.unwrap_or(self.piece_length);

        match self.torrents.entry(descriptor.info_hash) {
            MapEntry::Occupied(_) => Err(Error::AlreadyExists {
                info_hash: descriptor.info_hash,
                location,
            }),
            MapEntry::Vacant(vacant) => {
                let entry = EntrySingle::new(descriptor, total_size, piece_length, files, CurrentClock::now());

                vacant.insert(entry.into());

                debug!(info_hash = %descriptor.info_hash, total_size, piece_length, "torrent registered");

                Ok(descriptor.info_hash)
            }
        }
    }

    #[track_caller]
    fn set_metainfo(&self, key: &InfoHash, metainfo: Metainfo) -> Result<(), Error> {
        let Metainfo {
            total_size,
            piece_length,
            files,
        } = self.resolve(*key, metainfo)?;
        let piece_length = piece_length.unwrap_or(self.piece_length);

        let entry = self.torrents.get(key).ok_or_else(|| Error::torrent_not_found(*key))?;

        entry.value().set_metainfo(total_size, piece_length, files)?;

        debug!(info_hash = %key, total_size, piece_length, "metainfo set");

        Ok(())
    }

    #[track_caller]
    fn remove(&self, key: &InfoHash) -> Result<EntrySingle, Error> {
        let (_key, entry) = self.torrents.remove(key).ok_or_else(|| Error::torrent_not_found(*key))?;

        debug!(info_hash = %key, "torrent removed");

        Ok(entry.get_copy())
    }

    #[track_caller]
    fn upsert_peer(&self, key: &InfoHash, peer: &PeerRecord) -> Result<SwarmMetadata, Error> {
        let entry = self.torrents.get(key).ok_or_else(|| Error::torrent_not_found(*key))?;

        let swarm_metadata = entry.value().upsert_peer(peer);

        debug!(info_hash = %key, peer_id = %peer.peer_id, seeders = swarm_metadata.seeders, leechers = swarm_metadata.leechers, "peer upserted");

        Ok(swarm_metadata)
    }

    #[track_caller]
    fn remove_peer(&self, key: &InfoHash, peer_id: &peer::Id) -> Result<PeerRecord, Error> {
        let location = Location::caller();

        let entry = self.torrents.get(key).ok_or(Error::NotFound {
            subject: Subject::Torrent(*key),
            location,
        })?;

        let peer = entry.value().remove_peer(peer_id).ok_or(Error::NotFound {
            subject: Subject::Peer(*key, *peer_id),
            location,
        })?;

        debug!(info_hash = %key, peer_id = %peer_id, "peer removed");

        Ok(peer)
    }

    #[track_caller]
    fn update_transfer(
        &self,
        key: &InfoHash,
        downloaded_delta: NumberOfBytes,
        uploaded_delta: NumberOfBytes,
    ) -> Result<TorrentStatus, Error> {
        let entry = self.torrents.get(key).ok_or_else(|| Error::torrent_not_found(*key))?;

        let status = entry.value().update_transfer(downloaded_delta, uploaded_delta);

        debug!(info_hash = %key, downloaded_delta, uploaded_delta, %status, "transfer updated");

        Ok(status)
    }

    #[track_caller]
    fn set_status(&self, key: &InfoHash, target: TorrentStatus) -> Result<TorrentStatus, Error> {
        let entry = self.torrents.get(key).ok_or_else(|| Error::torrent_not_found(*key))?;

        let status = entry.value().set_status(target)?;

        debug!(info_hash = %key, %status, "status changed");

        Ok(status)
    }

    fn remove_inactive_peers(&self, current_cutoff: DurationSinceUnixEpoch) -> usize {
        let mut removed = 0;

        for entry in &self.torrents {
            removed += entry.value().remove_inactive_peers(current_cutoff);
        }

        removed
    }

    fn get(&self, key: &InfoHash) -> Option<EntrySingle> {
        self.torrents.get(key).map(|entry| entry.value().get_copy())
    }

    fn get_swarm_metadata(&self, key: &InfoHash) -> Option<SwarmMetadata> {
        self.torrents.get(key).map(|entry| entry.value().get_swarm_metadata())
    }

    fn get_metrics(&self) -> TorrentsMetrics {
        let mut metrics = TorrentsMetrics::default();

        for entry in &self.torrents {
            metrics.add_torrent(&entry.value().get_swarm_metadata());
        }

        metrics
    }

    fn snapshot(&self) -> BTreeMap<InfoHash, EntrySingle> {
        self.torrents
            .iter()
            .map(|entry| (*entry.key(), entry.value().get_copy()))
            .collect()
    }

    fn info_hashes(&self) -> Vec<InfoHash> {
        let mut info_hashes: Vec<InfoHash> = self.torrents.iter().map(|entry| *entry.key()).collect();
        info_hashes.sort();
        info_hashes
    }

    fn len(&self) -> usize {
        self.torrents.len()
    }
}
