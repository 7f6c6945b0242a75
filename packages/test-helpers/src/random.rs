use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use torrust_swarm_primitives::info_hash::InfoHash;
use torrust_swarm_primitives::peer;

/// Returns a random alphanumeric string of a certain size.
#[must_use]
pub fn string(size: usize) -> String {
    thread_rng().sample_iter(&Alphanumeric).take(size).map(char::from).collect()
}

#[must_use]
pub fn info_hash() -> InfoHash {
    InfoHash(thread_rng().gen())
}

#[must_use]
pub fn peer_id() -> peer::Id {
    peer::Id(thread_rng().gen())
}
