//! The node used by the transfer engine and several status readers at once.
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use torrust_swarm::core::Node;
use torrust_swarm_magnet::MagnetDescriptor;
use torrust_swarm_primitives::torrent::TorrentStatus;
use torrust_swarm_test_helpers::configuration::ephemeral;
use torrust_swarm_test_helpers::random;
use torrust_swarm_test_helpers::sample::magnet_link_for;

use crate::common::fixtures::{leecher, metainfo, peer, seeder, TOTAL_SIZE};

fn a_node() -> Arc<Node> {
    Arc::new(Node::new(&ephemeral().core))
}

#[test]
fn concurrent_peer_updates_on_different_torrents_should_all_be_kept() {
    let node = a_node();

    let info_hashes: Vec<_> = (0..8)
        .map(|_| {
            node.add(&MagnetDescriptor::new(random::info_hash()), metainfo())
                .unwrap()
        })
        .collect();

    thread::scope(|scope| {
        for info_hash in &info_hashes {
            let node = node.clone();

            scope.spawn(move || {
                for id in 0..50 {
                    node.upsert_peer(info_hash, peer(id, u32::try_from(id % 5).unwrap())).unwrap();
                }
            });
        }
    });

    let summary = node.global_summary();

    assert_eq!(summary.torrents, 8);
    assert_eq!(summary.peers, 8 * 50);
    assert_eq!(summary.seeders + summary.leechers, summary.peers);
}

#[test]
fn readers_should_never_see_a_torrent_in_the_middle_of_an_update() {
    let node = a_node();

    let info_hash = node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    thread::scope(|scope| {
        let writer = node.clone();

        scope.spawn(move || {
            for id in 0..200 {
                let record = if id % 2 == 0 { seeder(id) } else { leecher(id) };
                writer.upsert_peer(&info_hash, record).unwrap();
            }
        });

        for _ in 0..200 {
            if let Some(view) = node.per_torrent_view(&info_hash) {
                assert_eq!(view.seeders as usize + view.leechers as usize, view.connected_peers);
                assert_eq!(view.peers.len(), view.connected_peers);
            }
        }
    });

    assert_eq!(node.per_torrent_view(&info_hash).unwrap().connected_peers, 200);
}

#[test]
fn concurrent_transfer_reports_should_add_up() {
    let node = a_node();

    let info_hash = node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    thread::scope(|scope| {
        for _ in 0..4 {
            let node = node.clone();

            scope.spawn(move || {
                for _ in 0..1024 {
                    node.update_transfer(&info_hash, 1, 2).unwrap();
                }
            });
        }
    });

    let view = node.per_torrent_view(&info_hash).unwrap();

    assert_eq!(view.downloaded, 4 * 1024);
    assert_eq!(view.uploaded, 4 * 2 * 1024);
    assert_eq!(view.left, TOTAL_SIZE - 4 * 1024);
}

#[test]
fn downloading_every_byte_should_complete_the_torrent_and_uploading_should_make_it_seed() {
    let node = a_node();

    let info_hash = node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    assert_eq!(node.update_transfer(&info_hash, TOTAL_SIZE - 1, 0).unwrap(), TorrentStatus::Started);
    assert_eq!(node.update_transfer(&info_hash, 1, 0).unwrap(), TorrentStatus::Completed);
    assert_eq!(node.update_transfer(&info_hash, 0, 10).unwrap(), TorrentStatus::Seeding);

    let view = node.per_torrent_view(&info_hash).unwrap();

    assert!((view.progress - 100.0).abs() < f64::EPSILON);
    assert_eq!(view.left, 0);
}

#[test]
fn the_downloaded_counter_should_never_exceed_the_torrent_size() {
    let node = a_node();

    let info_hash = node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    node.update_transfer(&info_hash, TOTAL_SIZE * 2, 0).unwrap();

    assert_eq!(node.per_torrent_view(&info_hash).unwrap().downloaded, TOTAL_SIZE);
}

#[test]
fn adding_many_links_should_report_one_result_per_link() {
    let node = a_node();

    let info_hash = random::info_hash();
    let link = magnet_link_for(&info_hash);

    let results = node.add_many(&[link.as_str(), "not a magnet link", link.as_str()]);

    assert_eq!(results.len(), 3);
    assert_eq!(*results[0].as_ref().unwrap(), info_hash);
    assert!(results[1].is_err());
    assert!(results[2].is_err());
    assert_eq!(node.global_summary().torrents, 1);
}

#[test]
fn a_torrent_added_among_many_links_should_stay_started_until_its_size_is_known() {
    let node = a_node();

    let info_hash = node.add_many(&[magnet_link_for(&random::info_hash())]).remove(0).unwrap();

    assert_eq!(node.update_transfer(&info_hash, 1_000_000, 0).unwrap(), TorrentStatus::Started);
    assert!(node.per_torrent_view(&info_hash).unwrap().progress.abs() < f64::EPSILON);

    node.set_metainfo(&info_hash, metainfo()).unwrap();

    assert_eq!(node.update_transfer(&info_hash, TOTAL_SIZE, 0).unwrap(), TorrentStatus::Completed);
}

#[test]
fn the_snapshot_should_be_a_copy_not_affected_by_later_changes() {
    let node = a_node();

    let info_hash = node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    let snapshot = node.snapshot();

    node.upsert_peer(&info_hash, seeder(1)).unwrap();
    node.remove(&info_hash).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.contains_key(&info_hash));
    assert_eq!(node.snapshot().len(), 0);
}

#[test]
fn a_zero_peer_timeout_should_remove_every_peer_on_cleanup() {
    let mut config = ephemeral();
    config.core.max_peer_timeout = 0;

    let node = Node::new(&config.core);

    let info_hash = node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    node.upsert_peer(&info_hash, seeder(1)).unwrap();
    node.upsert_peer(&info_hash, leecher(2)).unwrap();

    thread::sleep(Duration::from_millis(10));

    assert_eq!(node.cleanup_peers(), 2);
    assert_eq!(node.global_summary().peers, 0);
    assert_eq!(node.global_summary().torrents, 1);
}
