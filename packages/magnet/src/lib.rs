//! Magnet links.
//!
//! A magnet link names a torrent by its info-hash, with an optional display
//! name and any number of trackers:
//!
//! ```text
//! magnet:?xt=urn:btih:3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0&dn=ubuntu.iso&tr=udp%3A%2F%2Ftracker.example%3A6969
//! ```
//!
//! [`parse`] turns a link into a [`MagnetDescriptor`] and [`build`] does the
//! inverse. The info-hash may be written as 40 hexadecimal characters or 32
//! base32 characters, in either case. It is always normalized to the 20 byte
//! [`InfoHash`], which renders as lowercase hex, so links built by this crate
//! always carry the hex form.
//!
//! ```rust
//! use torrust_swarm_magnet::{build, parse};
//!
//! let link = build("3B245504CF5F11BBDBE1201CEA6A6BF45AEE1BC0", Some("ubuntu.iso"), &[]).unwrap();
//!
//! assert_eq!(link, "magnet:?xt=urn:btih:3b245504cf5f11bbdbe1201cea6a6bf45aee1bc0&dn=ubuntu.iso");
//! assert_eq!(parse(&link).unwrap().name.as_deref(), Some("ubuntu.iso"));
//! ```
use std::panic::Location;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use thiserror::Error;
use torrust_swarm_primitives::info_hash::{ConversionError, InfoHash};

/// Every magnet link starts with this prefix.
pub const MAGNET_PREFIX: &str = "magnet:?";

/// URN namespace of `BitTorrent` v1 info-hashes in the `xt` parameter.
pub const BTIH_URN_PREFIX: &str = "urn:btih:";

/// Bytes escaped by [`build`]: everything outside the RFC 3986 unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// A parsed magnet link.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MagnetDescriptor {
    pub info_hash: InfoHash,
    /// The first `dn` parameter, decoded.
    pub name: Option<String>,
    /// Every `tr` parameter in the order of the link. The first one is the
    /// primary tracker. Duplicates are kept.
    pub trackers: Vec<String>,
}

impl MagnetDescriptor {
    #[must_use]
    pub fn new(info_hash: InfoHash) -> Self {
        Self {
            info_hash,
            name: None,
            trackers: Vec::new(),
        }
    }

    /// The canonical magnet link for this descriptor.
    #[must_use]
    pub fn to_magnet_link(&self) -> String {
        encode(&self.info_hash, self.name.as_deref(), &self.trackers)
    }
}

/// Errors returned by the magnet codec.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("the link does not start with `{MAGNET_PREFIX}`: {link}, {location}")]
    MalformedLink {
        link: String,
        location: &'static Location<'static>,
    },

    /// There is no `xt=urn:btih:` parameter, or its hash is not valid hex
    /// or base32.
    #[error("the magnet link has no valid `BitTorrent` info-hash: {link}, {location}")]
    MissingInfoHash {
        link: String,
        location: &'static Location<'static>,
    },

    #[error("invalid info-hash `{info_hash}`: {source}, {location}")]
    InvalidInfoHash {
        info_hash: String,
        source: ConversionError,
        location: &'static Location<'static>,
    },
}

/// Parses a magnet link.
///
/// Query parameters are decoded as `application/x-www-form-urlencoded`, so
/// `+` decodes to a space. Unknown parameters are ignored.
///
/// # Errors
///
/// Will return [`Error::MalformedLink`] if the link does not start with
/// [`MAGNET_PREFIX`], and [`Error::MissingInfoHash`] if the first
/// `xt=urn:btih:` parameter is missing or its hash can not be decoded.
#[track_caller]
pub fn parse(link: &str) -> Result<MagnetDescriptor, Error> {
    let location = Location::caller();

    let Some(query) = link.strip_prefix(MAGNET_PREFIX) else {
        return Err(Error::MalformedLink {
            link: link.to_owned(),
            location,
        });
    };

    let mut exact_topic = None;
    let mut name = None;
    let mut trackers = Vec::new();

    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "xt" if exact_topic.is_none() => exact_topic = strip_btih_urn(&value).map(str::to_owned),
            "dn" if name.is_none() => name = Some(value.into_owned()),
            "tr" => trackers.push(value.into_owned()),
            _ => {}
        }
    }

    let info_hash = exact_topic
        .and_then(|hash| InfoHash::from_hex_or_base32(&hash).ok())
        .ok_or_else(|| Error::MissingInfoHash {
            link: link.to_owned(),
            location,
        })?;

    Ok(MagnetDescriptor {
        info_hash,
        name,
        trackers,
    })
}

/// Builds a magnet link.
///
/// `info_hash` can be hex or base32 in either case. The link always carries
/// the lowercase hex form. `dn` is emitted whenever a name is given, even an
/// empty one.
///
/// # Errors
///
/// Will return [`Error::InvalidInfoHash`] if `info_hash` is empty or it is
/// not a valid hex or base32 info-hash.
#[track_caller]
pub fn build(info_hash: &str, name: Option<&str>, trackers: &[String]) -> Result<String, Error> {
    let location = Location::caller();

    let info_hash = InfoHash::from_hex_or_base32(info_hash).map_err(|source| Error::InvalidInfoHash {
        info_hash: info_hash.to_owned(),
        source,
        location,
    })?;

    Ok(encode(&info_hash, name, trackers))
}

fn encode(info_hash: &InfoHash, name: Option<&str>, trackers: &[String]) -> String {
    let mut link = format!("{MAGNET_PREFIX}xt={BTIH_URN_PREFIX}{info_hash}");

    if let Some(name) = name {
        link.push_str("&dn=");
        link.extend(utf8_percent_encode(name, COMPONENT));
    }

    for tracker in trackers {
        link.push_str("&tr=");
        link.extend(utf8_percent_encode(tracker, COMPONENT));
    }

    link
}

/// The hash part of an `xt` value, if it is a `BitTorrent` URN. The URN
/// namespace is matched ignoring case.
fn strip_btih_urn(exact_topic: &str) -> Option<&str> {
    let prefix = exact_topic.get(..BTIH_URN_PREFIX.len())?;

    if prefix.eq_ignore_ascii_case(BTIH_URN_PREFIX) {
        exact_topic.get(BTIH_URN_PREFIX.len()..)
    } else {
        None
    }
}
