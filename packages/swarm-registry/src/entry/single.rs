use std::panic::Location;

use torrust_swarm_primitives::peer::{self, PeerRecord};
use torrust_swarm_primitives::swarm_metadata::SwarmMetadata;
use torrust_swarm_primitives::torrent::{TorrentFile, TorrentStatus};
use torrust_swarm_primitives::{DurationSinceUnixEpoch, NumberOfBytes};

use super::Entry;
use crate::error::Error;
use crate::EntrySingle;

impl Entry for EntrySingle {
    #[allow(clippy::cast_possible_truncation)]
    fn get_swarm_metadata(&self) -> SwarmMetadata {
        let piece_count = self.piece_count();

        let seeders: u32 = self.peers.values().filter(|peer| peer.is_seeder(piece_count)).count() as u32;
        let leechers: u32 = self.peers.len() as u32 - seeders;

        SwarmMetadata { seeders, leechers }
    }

    fn upsert_peer(&mut self, peer: &PeerRecord) -> SwarmMetadata {
        drop(self.peers.insert(peer.peer_id, *peer));

        self.get_swarm_metadata()
    }

    fn remove_peer(&mut self, peer_id: &peer::Id) -> Option<PeerRecord> {
        self.peers.remove(peer_id)
    }

    fn remove_inactive_peers(&mut self, current_cutoff: DurationSinceUnixEpoch) -> usize {
        let before = self.peers.len();

        self.peers.retain(|_, peer| peer.updated > current_cutoff);

        before - self.peers.len()
    }

    fn update_transfer(&mut self, downloaded_delta: NumberOfBytes, uploaded_delta: NumberOfBytes) -> TorrentStatus {
        let status_before = self.status;

        self.downloaded = self.downloaded.saturating_add(downloaded_delta).min(self.total_size);
        self.uploaded = self.uploaded.saturating_add(uploaded_delta);

        match status_before {
            TorrentStatus::Started if self.is_complete() => self.status = TorrentStatus::Completed,
            TorrentStatus::Completed if uploaded_delta > 0 => self.status = TorrentStatus::Seeding,
            _ => {}
        }

        self.status
    }

    #[track_caller]
    fn set_status(&mut self, target: TorrentStatus) -> Result<TorrentStatus, Error> {
        let next = match (self.status, target) {
            (from, TorrentStatus::Paused) if from.can_pause() => TorrentStatus::Paused,
            (TorrentStatus::Paused, TorrentStatus::Started) if self.is_complete() => TorrentStatus::Seeding,
            (TorrentStatus::Paused, TorrentStatus::Started) => TorrentStatus::Started,
            (TorrentStatus::Completed, TorrentStatus::Seeding) => TorrentStatus::Seeding,
            (from, to) => {
                return Err(Error::InvalidTransition {
                    info_hash: self.info_hash,
                    from,
                    to,
                    location: Location::caller(),
                })
            }
        };

        self.status = next;

        Ok(next)
    }

    #[track_caller]
    fn set_metainfo(&mut self, total_size: NumberOfBytes, piece_length: NumberOfBytes, files: Vec<TorrentFile>) -> Result<(), Error> {
        if self.downloaded > 0 {
            return Err(Error::MetainfoLocked {
                info_hash: self.info_hash,
                location: Location::caller(),
            });
        }

        self.total_size = total_size;
        self.piece_length = piece_length.max(1);
        self.files = files;

        Ok(())
    }
}
