use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rstest::{fixture, rstest};
use torrust_swarm_clock::clock::stopped::Stopped as _;
use torrust_swarm_clock::clock::{self, Time};
use torrust_swarm_configuration::Core;
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::peer;
use torrust_swarm_primitives::torrent::{Metainfo, TorrentFile, TorrentStatus};
use torrust_swarm_primitives::torrent_metrics::TorrentsMetrics;
use torrust_swarm_registry::error::{Error, MetainfoProblem, Subject};
use torrust_swarm_registry::repository::Repository as _;
use torrust_swarm_registry::SwarmRegistry;

use crate::common::peer_builder::{a_leecher, a_seeder, PeerBuilder};
use crate::common::torrent::{descriptor, info_hash, metainfo, PIECE_LENGTH, TOTAL_SIZE};
use crate::CurrentClock;

fn a_registry() -> SwarmRegistry {
    SwarmRegistry::new(&Core {
        piece_length: PIECE_LENGTH,
        ..Default::default()
    })
}

#[fixture]
fn empty() -> SwarmRegistry {
    a_registry()
}

#[fixture]
fn single() -> SwarmRegistry {
    let registry = a_registry();
    registry.add(&descriptor(1), metainfo()).unwrap();
    registry
}

/// One torrent with one seeder, one with one leecher and one without peers.
#[fixture]
fn three() -> SwarmRegistry {
    let registry = a_registry();

    registry.add(&descriptor(1), metainfo()).unwrap();
    registry.upsert_peer(&info_hash(1), &a_seeder(1, 4)).unwrap();

    registry.add(&descriptor(2), metainfo()).unwrap();
    registry.upsert_peer(&info_hash(2), &a_leecher(2)).unwrap();

    registry.add(&descriptor(3), metainfo()).unwrap();

    registry
}

#[fixture]
fn many() -> SwarmRegistry {
    let registry = a_registry();

    for number in (0..408).rev() {
        registry.add(&descriptor(number), metainfo()).unwrap();
        registry.upsert_peer(&info_hash(number), &a_leecher(1)).unwrap();
    }

    registry
}

#[rstest]
#[case::empty(empty(), 0)]
#[case::single(single(), 1)]
#[case::three(three(), 3)]
#[case::many(many(), 408)]
fn it_should_count_the_registered_torrents(#[case] registry: SwarmRegistry, #[case] expected: usize) {
    assert_eq!(registry.len(), expected);
    assert_eq!(registry.snapshot().len(), expected);
    assert_eq!(registry.is_empty(), expected == 0);
}

#[rstest]
#[case::empty(empty(), TorrentsMetrics::default())]
#[case::single(single(), TorrentsMetrics { torrents: 1, peers: 0, seeders: 0, leechers: 0 })]
#[case::three(three(), TorrentsMetrics { torrents: 3, peers: 2, seeders: 1, leechers: 1 })]
#[case::many(many(), TorrentsMetrics { torrents: 408, peers: 408, seeders: 0, leechers: 408 })]
fn it_should_sum_the_swarm_counters_of_every_torrent(#[case] registry: SwarmRegistry, #[case] expected: TorrentsMetrics) {
    assert_eq!(registry.get_metrics(), expected);
}

#[rstest]
fn the_snapshot_should_be_ordered_by_info_hash(many: SwarmRegistry) {
    let keys: Vec<InfoHash> = many.snapshot().into_keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();

    assert_eq!(keys, sorted);
    assert_eq!(many.info_hashes(), sorted);
}

#[rstest]
fn a_new_torrent_should_be_registered_in_the_started_status(empty: SwarmRegistry) {
    let files = vec![TorrentFile::new("a/b.iso".to_owned(), TOTAL_SIZE)];

    let info_hash = empty.add(&descriptor(7), Metainfo::new(TOTAL_SIZE, files.clone())).unwrap();

    let torrent = empty.get(&info_hash).unwrap();

    assert_eq!(torrent.status(), TorrentStatus::Started);
    assert_eq!(torrent.display_name(), "torrent-7");
    assert_eq!(torrent.trackers().to_vec(), vec!["udp://tracker.example:6969/announce".to_owned()]);
    assert_eq!(torrent.files(), files.as_slice());
    assert_eq!(torrent.piece_length(), PIECE_LENGTH);
    assert_eq!(torrent.piece_count(), 4);
}

#[rstest]
fn the_total_size_should_be_taken_from_the_files_when_it_is_not_given(empty: SwarmRegistry) {
    let files = vec![
        TorrentFile::new("a.bin".to_owned(), 5_000),
        TorrentFile::new("b.bin".to_owned(), 5_000),
    ];

    let info_hash = empty.add(&descriptor(1), Metainfo::new(0, files)).unwrap();

    assert_eq!(empty.get(&info_hash).unwrap().total_size(), 10_000);
}

#[rstest]
fn a_total_size_that_does_not_match_the_files_should_be_rejected(empty: SwarmRegistry) {
    let files = vec![
        TorrentFile::new("a.bin".to_owned(), 5_000),
        TorrentFile::new("b.bin".to_owned(), 5_000),
    ];

    assert!(matches!(
        empty.add(&descriptor(1), Metainfo::new(10, files)),
        Err(Error::InvalidMetainfo {
            problem: MetainfoProblem::FilesSizeMismatch {
                total_size: 10,
                files_size: 10_000
            },
            ..
        })
    ));
    assert!(empty.is_empty());
}

#[rstest]
fn a_zero_piece_length_should_be_rejected(empty: SwarmRegistry) {
    assert!(matches!(
        empty.add(&descriptor(1), metainfo().with_piece_length(0)),
        Err(Error::InvalidMetainfo {
            problem: MetainfoProblem::ZeroPieceLength,
            ..
        })
    ));
}

#[rstest]
fn the_seeders_should_be_counted_with_the_piece_length_of_each_torrent(empty: SwarmRegistry) {
    const MIB: u64 = 1024 * 1024;

    let info_hash = empty
        .add(&descriptor(1), Metainfo::new(8 * MIB, vec![]).with_piece_length(MIB))
        .unwrap();

    empty.upsert_peer(&info_hash, &a_seeder(1, 4)).unwrap();
    let swarm_metadata = empty.upsert_peer(&info_hash, &a_seeder(2, 8)).unwrap();

    assert_eq!(empty.get(&info_hash).unwrap().piece_length(), MIB);
    assert_eq!(empty.get(&info_hash).unwrap().piece_count(), 8);
    assert_eq!(swarm_metadata.seeders, 1);
    assert_eq!(swarm_metadata.leechers, 1);
}

#[rstest]
fn a_torrent_added_without_metainfo_should_get_it_later(empty: SwarmRegistry) {
    let info_hash = empty.add(&descriptor(1), Metainfo::unknown()).unwrap();

    assert_eq!(empty.update_transfer(&info_hash, 0, 0).unwrap(), TorrentStatus::Started);

    empty
        .set_metainfo(&info_hash, Metainfo::new(0, vec![TorrentFile::new("a.iso".to_owned(), TOTAL_SIZE)]))
        .unwrap();

    let torrent = empty.get(&info_hash).unwrap();

    assert_eq!(torrent.total_size(), TOTAL_SIZE);
    assert_eq!(torrent.piece_length(), PIECE_LENGTH);
    assert_eq!(
        empty.update_transfer(&info_hash, TOTAL_SIZE, 0).unwrap(),
        TorrentStatus::Completed
    );
}

#[rstest]
fn the_metainfo_can_not_be_set_once_the_download_started(single: SwarmRegistry) {
    single.update_transfer(&info_hash(1), 1, 0).unwrap();

    assert!(matches!(
        single.set_metainfo(&info_hash(1), Metainfo::new(2 * TOTAL_SIZE, vec![])),
        Err(Error::MetainfoLocked { .. })
    ));
    assert!(matches!(
        single.set_metainfo(&info_hash(99), metainfo()),
        Err(Error::NotFound { .. })
    ));
    assert_eq!(single.get(&info_hash(1)).unwrap().total_size(), TOTAL_SIZE);
}

#[rstest]
fn a_torrent_can_not_be_registered_twice(single: SwarmRegistry) {
    assert!(matches!(
        single.add(&descriptor(1), metainfo()),
        Err(Error::AlreadyExists { info_hash: existing, .. }) if existing == info_hash(1)
    ));
    assert_eq!(single.len(), 1);
}

#[rstest]
fn a_removed_torrent_should_not_be_in_the_snapshot_and_can_not_be_removed_again(three: SwarmRegistry) {
    let removed = three.remove(&info_hash(1)).unwrap();

    assert_eq!(removed.peers().count(), 1);
    assert!(!three.snapshot().contains_key(&info_hash(1)));
    assert!(matches!(
        three.remove(&info_hash(1)),
        Err(Error::NotFound {
            subject: Subject::Torrent(_),
            ..
        })
    ));
}

#[rstest]
fn mutations_of_an_unknown_torrent_should_fail_with_not_found(empty: SwarmRegistry) {
    let unknown = info_hash(99);

    assert!(matches!(
        empty.upsert_peer(&unknown, &a_leecher(1)),
        Err(Error::NotFound { .. })
    ));
    assert!(matches!(
        empty.remove_peer(&unknown, &peer::Id::from(1)),
        Err(Error::NotFound {
            subject: Subject::Torrent(_),
            ..
        })
    ));
    assert!(matches!(empty.update_transfer(&unknown, 1, 1), Err(Error::NotFound { .. })));
    assert!(matches!(
        empty.set_status(&unknown, TorrentStatus::Paused),
        Err(Error::NotFound { .. })
    ));
}

#[rstest]
fn removing_an_unknown_peer_should_fail_with_not_found(single: SwarmRegistry) {
    assert!(matches!(
        single.remove_peer(&info_hash(1), &peer::Id::from(1)),
        Err(Error::NotFound {
            subject: Subject::Peer(_, _),
            ..
        })
    ));
}

#[rstest]
fn a_peer_can_be_added_updated_and_removed(single: SwarmRegistry) {
    let peer = PeerBuilder::new().with_peer_id(1.into()).holding(1).build();
    single.upsert_peer(&info_hash(1), &peer).unwrap();

    let updated = PeerBuilder::new().with_peer_id(1.into()).holding(4).unchoked().build();
    let swarm_metadata = single.upsert_peer(&info_hash(1), &updated).unwrap();

    assert_eq!(swarm_metadata.seeders, 1);
    assert_eq!(swarm_metadata.leechers, 0);

    assert_eq!(single.remove_peer(&info_hash(1), &peer::Id::from(1)).unwrap(), updated);
    assert_eq!(single.get_swarm_metadata(&info_hash(1)).unwrap().peers(), 0);
}

#[rstest]
fn the_derived_counters_should_separate_seeders_from_leechers(single: SwarmRegistry) {
    single.upsert_peer(&info_hash(1), &a_seeder(1, 4)).unwrap();
    single.upsert_peer(&info_hash(1), &a_leecher(2)).unwrap();
    single.upsert_peer(&info_hash(1), &a_leecher(3)).unwrap();

    let swarm_metadata = single.get_swarm_metadata(&info_hash(1)).unwrap();

    assert_eq!(swarm_metadata.seeders, 1);
    assert_eq!(swarm_metadata.leechers, 2);
    assert_eq!(swarm_metadata.peers(), 3);
}

#[rstest]
fn pausing_and_resuming_an_incomplete_torrent_should_restore_the_started_status(single: SwarmRegistry) {
    single.update_transfer(&info_hash(1), PIECE_LENGTH, 0).unwrap();

    assert_eq!(single.set_status(&info_hash(1), TorrentStatus::Paused).unwrap(), TorrentStatus::Paused);
    assert_eq!(single.set_status(&info_hash(1), TorrentStatus::Started).unwrap(), TorrentStatus::Started);
}

#[rstest]
fn a_complete_torrent_can_not_be_resumed_unless_it_is_paused(single: SwarmRegistry) {
    assert_eq!(
        single.update_transfer(&info_hash(1), TOTAL_SIZE, 0).unwrap(),
        TorrentStatus::Completed
    );

    assert!(matches!(
        single.set_status(&info_hash(1), TorrentStatus::Started),
        Err(Error::InvalidTransition {
            from: TorrentStatus::Completed,
            to: TorrentStatus::Started,
            ..
        })
    ));
}

#[rstest]
fn the_downloaded_counter_should_never_exceed_the_total_size(single: SwarmRegistry) {
    single.update_transfer(&info_hash(1), TOTAL_SIZE + 1, 0).unwrap();

    let torrent = single.get(&info_hash(1)).unwrap();

    assert_eq!(torrent.downloaded(), TOTAL_SIZE);
    assert_eq!(torrent.left(), 0);
    assert!(torrent.progress() <= 100.0);
}

#[rstest]
fn a_snapshot_should_not_change_when_the_registry_changes(single: SwarmRegistry) {
    let snapshot = single.snapshot();

    single.upsert_peer(&info_hash(1), &a_leecher(1)).unwrap();
    single.update_transfer(&info_hash(1), 10, 10).unwrap();

    let torrent = &snapshot[&info_hash(1)];

    assert_eq!(torrent.peers().count(), 0);
    assert_eq!(torrent.downloaded(), 0);
}

#[rstest]
fn inactive_peers_should_be_removed_from_every_torrent(three: SwarmRegistry) {
    let now = clock::Working::now();
    clock::Stopped::local_set(&now);

    let stale = PeerBuilder::new()
        .with_peer_id(10.into())
        .updated_at(now - Duration::from_secs(901))
        .build();
    three.upsert_peer(&info_hash(3), &stale).unwrap();
    three.upsert_peer(&info_hash(2), &PeerBuilder::new().with_peer_id(11.into()).build()).unwrap();

    let cutoff = CurrentClock::now_sub(&Duration::from_secs(900)).unwrap();

    assert_eq!(three.remove_inactive_peers(cutoff), 1);
    assert_eq!(three.get_metrics().peers, 3);
    assert_eq!(three.get_swarm_metadata(&info_hash(3)).unwrap().peers(), 0);

    clock::Stopped::local_reset();
}

#[test]
fn concurrent_upserts_with_distinct_peer_ids_should_not_lose_updates() {
    const THREADS: i32 = 16;
    const PEERS_PER_THREAD: i32 = 50;

    let registry = Arc::new(a_registry());
    registry.add(&descriptor(1), metainfo()).unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_number| {
            let registry = registry.clone();
            thread::spawn(move || {
                for i in 0..PEERS_PER_THREAD {
                    let id = thread_number * PEERS_PER_THREAD + i;
                    registry.upsert_peer(&info_hash(1), &a_leecher(id)).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = registry.snapshot();

    assert_eq!(snapshot[&info_hash(1)].peers().count(), (THREADS * PEERS_PER_THREAD) as usize);
}

#[test]
fn a_snapshot_should_never_observe_a_torrent_in_the_middle_of_a_mutation() {
    const UPDATES: u64 = 2_000;

    let registry = Arc::new(a_registry());
    registry.add(&descriptor(1), Metainfo::new(u64::MAX, vec![])).unwrap();

    let writer = {
        let registry = registry.clone();
        thread::spawn(move || {
            for _ in 0..UPDATES {
                registry.update_transfer(&info_hash(1), 1, 1).unwrap();
            }
        })
    };

    for _ in 0..UPDATES {
        let torrent = registry.get(&info_hash(1)).unwrap();
        assert_eq!(torrent.downloaded(), torrent.uploaded());
    }

    writer.join().unwrap();

    let torrent = registry.get(&info_hash(1)).unwrap();
    assert_eq!(torrent.downloaded(), UPDATES);
}

#[test]
fn once_a_torrent_is_removed_concurrent_mutations_should_fail_with_not_found() {
    let registry = Arc::new(a_registry());
    registry.add(&descriptor(1), metainfo()).unwrap();

    let writer = {
        let registry = registry.clone();
        thread::spawn(move || {
            let mut results = Vec::new();
            for id in 0..1_000 {
                results.push(registry.upsert_peer(&info_hash(1), &a_leecher(id)).is_ok());
            }
            results
        })
    };

    registry.remove(&info_hash(1)).unwrap();

    let results = writer.join().unwrap();

    // Every success happened before the removal, every failure after it.
    let first_failure = results.iter().position(|ok| !ok).unwrap_or(results.len());
    assert!(results[first_failure..].iter().all(|ok| !ok));
    assert!(registry.get(&info_hash(1)).is_none());
}
