//! Helpers for the tests of the Torrust Swarm crates.
pub mod configuration;
pub mod random;
pub mod sample;
