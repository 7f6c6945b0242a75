use std::sync::Arc;

use torrust_swarm_primitives::peer::{self, PeerRecord};
use torrust_swarm_primitives::swarm_metadata::SwarmMetadata;
use torrust_swarm_primitives::torrent::{TorrentFile, TorrentStatus};
use torrust_swarm_primitives::{DurationSinceUnixEpoch, NumberOfBytes};

use super::{Entry, EntrySync};
use crate::error::Error;
use crate::{EntryMutexParkingLot, EntrySingle};

impl EntrySync for EntryMutexParkingLot {
    fn get_swarm_metadata(&self) -> SwarmMetadata {
        self.lock().get_swarm_metadata()
    }

    fn get_copy(&self) -> EntrySingle {
        self.lock().clone()
    }

    fn upsert_peer(&self, peer: &PeerRecord) -> SwarmMetadata {
        self.lock().upsert_peer(peer)
    }

    fn remove_peer(&self, peer_id: &peer::Id) -> Option<PeerRecord> {
        self.lock().remove_peer(peer_id)
    }

    fn remove_inactive_peers(&self, current_cutoff: DurationSinceUnixEpoch) -> usize {
        self.lock().remove_inactive_peers(current_cutoff)
    }

    fn update_transfer(&self, downloaded_delta: NumberOfBytes, uploaded_delta: NumberOfBytes) -> TorrentStatus {
        self.lock().update_transfer(downloaded_delta, uploaded_delta)
    }

    #[track_caller]
    fn set_status(&self, target: TorrentStatus) -> Result<TorrentStatus, Error> {
        self.lock().set_status(target)
    }

    #[track_caller]
    fn set_metainfo(&self, total_size: NumberOfBytes, piece_length: NumberOfBytes, files: Vec<TorrentFile>) -> Result<(), Error> {
        self.lock().set_metainfo(total_size, piece_length, files)
    }
}

impl From<EntrySingle> for EntryMutexParkingLot {
    fn from(entry: EntrySingle) -> Self {
        Arc::new(parking_lot::Mutex::new(entry))
    }
}
