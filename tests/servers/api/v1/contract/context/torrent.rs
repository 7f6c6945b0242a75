use serde_json::json;
use torrust_swarm::servers::apis::v1::context::stats::resources::Stats;
use torrust_swarm::servers::apis::v1::context::torrent::resources::torrent::StatusChange;
use torrust_swarm_magnet::MagnetDescriptor;
use torrust_swarm_primitives::torrent::TorrentStatus;
use torrust_swarm_test_helpers::configuration;
use torrust_swarm_test_helpers::random;
use torrust_swarm_test_helpers::sample::{SAMPLE_INFO_HASH, SAMPLE_MAGNET_LINK};

use crate::common::fixtures::{leecher, magnet_link, metainfo, seeder, TOTAL_SIZE};
use crate::servers::api::v1::asserts::{
    assert_bad_request, assert_conflict, assert_invalid_info_hash_param, assert_ok, assert_status_change,
    assert_torrent_added, assert_torrent_info, assert_torrent_list, assert_torrent_not_known,
};
use crate::servers::api::v1::client::Client;
use crate::servers::api::Started;

const INVALID_INFO_HASHES: [&str; 3] = ["0", "-1", "000000000000000000000000000000000000000"];

#[tokio::test]
async fn should_allow_getting_all_torrents_with_the_summary() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let info_hash = env
        .node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    env.node.upsert_peer(&info_hash, seeder(1)).unwrap();
    env.node.upsert_peer(&info_hash, leecher(2)).unwrap();

    let response = Client::new(env.bind_address()).get_torrents().await;

    let list = assert_torrent_list(response).await;

    assert_eq!(
        list.summary,
        Stats {
            torrents: 1,
            peers: 2,
            seeders: 1,
            leechers: 1,
        }
    );
    assert_eq!(list.torrents.len(), 1);
    assert_eq!(list.torrents[0].info_hash, info_hash.to_string());
    assert_eq!(list.torrents[0].connected_peers, 2);

    env.stop().await;
}

#[tokio::test]
async fn should_return_an_empty_list_when_the_node_has_no_torrents() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.bind_address()).get_torrents().await;

    let list = assert_torrent_list(response).await;

    assert_eq!(list.summary, Stats::default());
    assert!(list.torrents.is_empty());

    env.stop().await;
}

#[tokio::test]
async fn should_allow_getting_a_torrent_with_its_derived_counters() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let info_hash = env
        .node
        .add_magnet(&magnet_link(&random::info_hash(), "linux.iso"), metainfo())
        .unwrap();

    env.node.update_transfer(&info_hash, TOTAL_SIZE / 2, 0).unwrap();
    env.node.upsert_peer(&info_hash, seeder(1)).unwrap();
    env.node.upsert_peer(&info_hash, leecher(2)).unwrap();
    env.node.upsert_peer(&info_hash, leecher(3)).unwrap();

    let response = Client::new(env.bind_address()).get_torrent(&info_hash.to_string()).await;

    let torrent = assert_torrent_info(response).await;

    assert_eq!(torrent.name, "linux.iso");
    assert_eq!(torrent.status, TorrentStatus::Started);
    assert_eq!(torrent.piece_count, 4);
    assert_eq!(torrent.downloaded, TOTAL_SIZE / 2);
    assert_eq!(torrent.left, TOTAL_SIZE / 2);
    assert!((torrent.progress - 50.0).abs() < f64::EPSILON);
    assert_eq!(torrent.progress_display, "50.0%");
    assert_eq!(torrent.connected_peers, 3);
    assert_eq!(torrent.seeders, 1);
    assert_eq!(torrent.leechers, 2);
    assert_eq!(torrent.peers.len(), 3);
    assert_eq!(torrent.peers.iter().filter(|peer| peer.seeder).count(), 1);

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_torrent_that_is_not_registered() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.bind_address()).get_torrent(SAMPLE_INFO_HASH).await;

    assert_torrent_not_known(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_getting_a_torrent_when_the_info_hash_is_invalid() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    for invalid_info_hash in &INVALID_INFO_HASHES {
        let response = Client::new(env.bind_address()).get_torrent(invalid_info_hash).await;

        assert_invalid_info_hash_param(response, invalid_info_hash).await;
    }

    env.stop().await;
}

#[tokio::test]
async fn should_allow_adding_a_torrent_from_a_magnet_link() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    let response = client.add_torrent(&json!({ "magnet_url": SAMPLE_MAGNET_LINK })).await;

    assert_torrent_added(response, SAMPLE_INFO_HASH).await;

    let torrent = assert_torrent_info(client.get_torrent(SAMPLE_INFO_HASH).await).await;

    assert_eq!(torrent.name, "ubuntu-24.04-desktop-amd64.iso");
    assert_eq!(torrent.trackers, vec!["udp://tracker.opentrackr.org:1337/announce".to_string()]);
    assert_eq!(torrent.status, TorrentStatus::Started);
    assert_eq!(torrent.total_size, 0);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_adding_a_torrent_with_its_size_and_files() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    let response = client
        .add_torrent(&json!({
            "magnet_url": SAMPLE_MAGNET_LINK,
            "total_size": TOTAL_SIZE,
            "files": [{ "path": "ubuntu.iso", "length": TOTAL_SIZE }]
        }))
        .await;

    assert_torrent_added(response, SAMPLE_INFO_HASH).await;

    let torrent = assert_torrent_info(client.get_torrent(SAMPLE_INFO_HASH).await).await;

    assert_eq!(torrent.total_size, TOTAL_SIZE);
    assert_eq!(torrent.piece_count, 4);
    assert_eq!(torrent.files.len(), 1);

    env.stop().await;
}

#[tokio::test]
async fn should_allow_adding_a_torrent_with_its_own_piece_length() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    let response = client
        .add_torrent(&json!({
            "magnet_url": SAMPLE_MAGNET_LINK,
            "total_size": TOTAL_SIZE,
            "piece_length": TOTAL_SIZE / 2
        }))
        .await;

    assert_torrent_added(response, SAMPLE_INFO_HASH).await;

    let torrent = assert_torrent_info(client.get_torrent(SAMPLE_INFO_HASH).await).await;

    assert_eq!(torrent.piece_length, TOTAL_SIZE / 2);
    assert_eq!(torrent.piece_count, 2);

    env.stop().await;
}

#[tokio::test]
async fn should_fail_adding_a_torrent_whose_size_does_not_match_its_files() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    let response = client
        .add_torrent(&json!({
            "magnet_url": SAMPLE_MAGNET_LINK,
            "total_size": 10,
            "files": [{ "path": "a.bin", "length": 5000 }, { "path": "b.bin", "length": 5000 }]
        }))
        .await;

    assert_bad_request(response).await;

    assert_torrent_not_known(client.get_torrent(SAMPLE_INFO_HASH).await).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_setting_the_metainfo_of_a_torrent_added_from_a_link_alone() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    assert_torrent_added(client.add_torrent(&json!({ "magnet_url": SAMPLE_MAGNET_LINK })).await, SAMPLE_INFO_HASH).await;

    let response = client
        .set_metainfo(
            SAMPLE_INFO_HASH,
            &json!({ "files": [{ "path": "ubuntu.iso", "length": TOTAL_SIZE }] }),
        )
        .await;

    assert_ok(response).await;

    let torrent = assert_torrent_info(client.get_torrent(SAMPLE_INFO_HASH).await).await;

    assert_eq!(torrent.total_size, TOTAL_SIZE);
    assert_eq!(torrent.piece_count, 4);
    assert_eq!(torrent.files.len(), 1);

    env.stop().await;
}

#[tokio::test]
async fn should_fail_setting_the_metainfo_once_the_download_started() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let info_hash = env
        .node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    env.node.update_transfer(&info_hash, 1, 0).unwrap();

    let response = Client::new(env.bind_address())
        .set_metainfo(&info_hash.to_string(), &json!({ "total_size": 2 * TOTAL_SIZE }))
        .await;

    assert_conflict(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_setting_the_metainfo_of_a_torrent_that_is_not_registered() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.bind_address())
        .set_metainfo(SAMPLE_INFO_HASH, &json!({ "total_size": TOTAL_SIZE }))
        .await;

    assert_torrent_not_known(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_adding_a_torrent_with_an_invalid_magnet_link() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    for invalid_link in ["http://example.com", "magnet:?dn=no-info-hash", "magnet:?xt=urn:btih:XYZ"] {
        let response = client.add_torrent(&json!({ "magnet_url": invalid_link })).await;

        assert_bad_request(response).await;
    }

    let list = assert_torrent_list(client.get_torrents().await).await;

    assert!(list.torrents.is_empty());

    env.stop().await;
}

#[tokio::test]
async fn should_fail_adding_a_torrent_that_is_already_registered() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let client = Client::new(env.bind_address());

    assert_torrent_added(client.add_torrent(&json!({ "magnet_url": SAMPLE_MAGNET_LINK })).await, SAMPLE_INFO_HASH).await;

    let response = client.add_torrent(&json!({ "magnet_url": SAMPLE_MAGNET_LINK })).await;

    assert_conflict(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_allow_deleting_a_torrent() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let info_hash = env
        .node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    env.node.upsert_peer(&info_hash, seeder(1)).unwrap();

    let client = Client::new(env.bind_address());

    assert_ok(client.delete_torrent(&info_hash.to_string()).await).await;

    assert_torrent_not_known(client.get_torrent(&info_hash.to_string()).await).await;

    assert_eq!(env.node.global_summary().peers, 0);

    env.stop().await;
}

#[tokio::test]
async fn should_fail_deleting_a_torrent_that_is_not_registered() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.bind_address()).delete_torrent(SAMPLE_INFO_HASH).await;

    assert_torrent_not_known(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_deleting_a_torrent_when_the_info_hash_is_invalid() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    for invalid_info_hash in &INVALID_INFO_HASHES {
        let response = Client::new(env.bind_address()).delete_torrent(invalid_info_hash).await;

        assert_invalid_info_hash_param(response, invalid_info_hash).await;
    }

    env.stop().await;
}

#[tokio::test]
async fn should_allow_pausing_and_resuming_a_torrent() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let info_hash = env
        .node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    let client = Client::new(env.bind_address());

    assert_status_change(
        client.pause_torrent(&info_hash.to_string()).await,
        StatusChange::new(&info_hash, TorrentStatus::Paused),
    )
    .await;

    assert_status_change(
        client.resume_torrent(&info_hash.to_string()).await,
        StatusChange::new(&info_hash, TorrentStatus::Started),
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn a_completed_torrent_should_be_resumed_as_seeding() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let info_hash = env
        .node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    env.node.update_transfer(&info_hash, TOTAL_SIZE, 0).unwrap();

    let client = Client::new(env.bind_address());

    assert_status_change(
        client.pause_torrent(&info_hash.to_string()).await,
        StatusChange::new(&info_hash, TorrentStatus::Paused),
    )
    .await;

    assert_status_change(
        client.resume_torrent(&info_hash.to_string()).await,
        StatusChange::new(&info_hash, TorrentStatus::Seeding),
    )
    .await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_pausing_a_torrent_that_is_already_paused() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let info_hash = env
        .node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    env.node.pause(&info_hash).unwrap();

    let response = Client::new(env.bind_address()).pause_torrent(&info_hash.to_string()).await;

    assert_conflict(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_resuming_a_torrent_that_is_not_paused() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let info_hash = env
        .node
        .add(&MagnetDescriptor::new(random::info_hash()), metainfo())
        .unwrap();

    let response = Client::new(env.bind_address()).resume_torrent(&info_hash.to_string()).await;

    assert_conflict(response).await;

    env.stop().await;
}

#[tokio::test]
async fn should_fail_pausing_a_torrent_that_is_not_registered() {
    let env = Started::new(&configuration::ephemeral().into()).await;

    let response = Client::new(env.bind_address()).pause_torrent(SAMPLE_INFO_HASH).await;

    assert_torrent_not_known(response).await;

    env.stop().await;
}
