//! Torrent-level primitives: the lifecycle status, the file list and the
//! content described by the metainfo.
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

use crate::NumberOfBytes;

/// Status of a torrent in the local node.
///
/// ```text
/// Started ──pause──▶ Paused ──resume──▶ Started | Seeding
/// Started ──(downloaded == total_size)──▶ Completed ──(upload)──▶ Seeding
/// Completed | Seeding ──pause──▶ Paused
/// ```
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TorrentStatus {
    /// Downloading (or waiting for peers). The initial status.
    #[default]
    Started,
    /// Stopped by the owner. Counters are kept.
    Paused,
    /// Every byte has been downloaded.
    Completed,
    /// Complete and still uploading to the swarm.
    Seeding,
}

impl TorrentStatus {
    /// Whether the torrent can be paused from this status.
    #[must_use]
    pub fn can_pause(self) -> bool {
        !matches!(self, TorrentStatus::Paused)
    }
}

impl std::fmt::Display for TorrentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            TorrentStatus::Started => "started",
            TorrentStatus::Paused => "paused",
            TorrentStatus::Completed => "completed",
            TorrentStatus::Seeding => "seeding",
        };

        f.write_str(status)
    }
}

/// A file in the torrent, in metainfo order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, Constructor)]
pub struct TorrentFile {
    /// Path relative to the torrent root.
    pub path: String,
    /// File size in bytes.
    pub length: NumberOfBytes,
}

/// The content of a torrent, as its metainfo describes it.
///
/// A torrent added from a magnet link alone starts with the
/// [`unknown`](Metainfo::unknown) metainfo, until the transfer engine has
/// fetched the real one.
///
/// ```rust
/// use torrust_swarm_primitives::torrent::{Metainfo, TorrentFile};
///
/// let metainfo = Metainfo::new(0, vec![TorrentFile::new("a.iso".to_owned(), 700), TorrentFile::new("b.txt".to_owned(), 300)])
///     .with_piece_length(256);
///
/// assert_eq!(metainfo.files_size(), 1000);
/// assert_eq!(metainfo.piece_length, Some(256));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct Metainfo {
    /// Zero when it has to be taken from the files.
    #[serde(default)]
    pub total_size: NumberOfBytes,
    /// `None` when the metainfo does not tell. The node's default applies.
    #[serde(default)]
    pub piece_length: Option<NumberOfBytes>,
    #[serde(default)]
    pub files: Vec<TorrentFile>,
}

impl Metainfo {
    #[must_use]
    pub fn new(total_size: NumberOfBytes, files: Vec<TorrentFile>) -> Self {
        Self {
            total_size,
            piece_length: None,
            files,
        }
    }

    /// Nothing is known about the content yet.
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_piece_length(mut self, piece_length: NumberOfBytes) -> Self {
        self.piece_length = Some(piece_length);
        self
    }

    /// Sum of the file lengths.
    #[must_use]
    pub fn files_size(&self) -> NumberOfBytes {
        self.files.iter().fold(0, |size, file| size.saturating_add(file.length))
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.total_size == 0 && self.files.is_empty()
    }
}
