use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use torrust_swarm_configuration::{Configuration, Threshold};

/// Small pieces keep the numbers in test torrents readable.
pub const TEST_PIECE_LENGTH: u64 = 16_384;

/// This configuration is used for testing. The API binds to an ephemeral
/// port so several nodes can run at the same time, and logging is off.
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    // Change to `Debug` for tests debugging
    config.logging.threshold = Threshold::Off;

    config.core.piece_length = TEST_PIECE_LENGTH;

    config.http_api.enabled = true;
    config.http_api.bind_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0);

    config
}

/// Ephemeral configuration where speeds are sampled on every view.
#[must_use]
pub fn ephemeral_without_sampling_window() -> Configuration {
    let mut config = ephemeral();

    config.core.speed_sampling_window = 0;

    config
}
