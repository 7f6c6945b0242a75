//! API resources for the [`torrent`](crate::servers::apis::v1::context::torrent)
//! API context.
pub mod peer;
pub mod torrent;
