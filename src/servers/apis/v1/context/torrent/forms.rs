//! Request bodies for the [`torrent`](crate::servers::apis::v1::context::torrent)
//! API context.
use serde::{Deserialize, Serialize};
use torrust_swarm_primitives::torrent::Metainfo;

/// Body of the `POST /torrents` request.
///
/// Only the magnet link is required. The [`Metainfo`] fields (`total_size`,
/// `piece_length` and `files`) can be sent next to it when they are already
/// known. Otherwise they are set later with `POST /torrent/{info_hash}/metainfo`.
#[derive(Serialize, Deserialize, Debug)]
pub struct AddTorrentForm {
    pub magnet_url: String,
    #[serde(flatten)]
    pub metainfo: Metainfo,
}
