//! Time source for the swarm node.
//!
//! Every timestamp in the node (peer `updated` times, torrent `added` times,
//! speed samples) is a `DurationSinceUnixEpoch` taken from one of the clocks in
//! this crate, never from `SystemTime` directly. Production code uses the
//! [`Working`](clock::Working) clock. Tests use the [`Stopped`](clock::Stopped)
//! clock, which only moves when the test moves it, so peer expiry and transfer
//! speeds can be checked without sleeping.
//!
//! > **NOTICE**: the stopped clock is thread local. A test that spawns threads
//! > gets the default fixed time (the Unix Epoch) in every new thread.
pub mod clock;
pub mod static_time;

#[macro_use]
extern crate lazy_static;

/// This code needs to be copied into each crate.
/// Working version, for production.
#[cfg(not(test))]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Working;

/// Stopped version, for testing.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) type CurrentClock = clock::Stopped;
