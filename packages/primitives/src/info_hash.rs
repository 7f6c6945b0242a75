//! `BitTorrent` Info Hash v1.
//!
//! The canonical representation is the 20 raw bytes. It is always rendered
//! as a 40 character lowercase hexadecimal string, regardless of the case or
//! encoding (hex or base32) it was parsed from.
use data_encoding::BASE32;
use thiserror::Error;

/// `BitTorrent` Info Hash v1
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug, PartialOrd, Ord)]
pub struct InfoHash(pub [u8; 20]);

pub const INFO_HASH_BYTES_LEN: usize = 20;

/// Length of the hexadecimal representation.
pub const INFO_HASH_HEX_LEN: usize = 40;

/// Length of the base32 representation used by some magnet links.
pub const INFO_HASH_BASE32_LEN: usize = 32;

impl InfoHash {
    /// Returns the `InfoHash` internal byte array.
    #[must_use]
    pub fn bytes(&self) -> [u8; 20] {
        self.0
    }

    /// Returns the `InfoHash` as a lowercase hex string.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        self.to_string()
    }

    /// Decodes a 32 character RFC 4648 base32 string (case is ignored).
    ///
    /// # Errors
    ///
    /// Will return a [`ConversionError`] if the input does not have 32
    /// characters or it is not valid base32.
    pub fn from_base32(value: &str) -> Result<Self, ConversionError> {
        if value.len() != INFO_HASH_BASE32_LEN {
            return Err(ConversionError::InvalidLength { len: value.len() });
        }

        let bytes = BASE32
            .decode(value.to_ascii_uppercase().as_bytes())
            .map_err(|_| ConversionError::InvalidBase32 {
                value: value.to_owned(),
            })?;

        Self::try_from(bytes.as_slice())
    }

    /// Parses either of the two textual encodings found in magnet links:
    /// 40 hexadecimal characters or 32 base32 characters.
    ///
    /// # Errors
    ///
    /// Will return a [`ConversionError`] if the length matches neither
    /// encoding or the characters are not valid for the detected one.
    pub fn from_hex_or_base32(value: &str) -> Result<Self, ConversionError> {
        match value.len() {
            INFO_HASH_HEX_LEN => value.parse(),
            INFO_HASH_BASE32_LEN => Self::from_base32(value),
            len => Err(ConversionError::InvalidLength { len }),
        }
    }
}

impl std::fmt::Display for InfoHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut chars = [0u8; INFO_HASH_HEX_LEN];
        let hex = binascii::bin2hex(&self.0, &mut chars).map_err(|_| std::fmt::Error)?;
        f.write_str(std::str::from_utf8(hex).map_err(|_| std::fmt::Error)?)
    }
}

impl std::str::FromStr for InfoHash {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != INFO_HASH_HEX_LEN {
            return Err(ConversionError::InvalidLength { len: s.len() });
        }

        let mut i = Self([0u8; INFO_HASH_BYTES_LEN]);
        binascii::hex2bin(s.to_ascii_lowercase().as_bytes(), &mut i.0)
            .map_err(|_| ConversionError::InvalidHex { value: s.to_owned() })?;
        Ok(i)
    }
}

impl std::convert::From<[u8; 20]> for InfoHash {
    fn from(val: [u8; 20]) -> Self {
        InfoHash(val)
    }
}

impl TryFrom<&[u8]> for InfoHash {
    type Error = ConversionError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; INFO_HASH_BYTES_LEN] = bytes
            .try_into()
            .map_err(|_| ConversionError::InvalidByteLength { len: bytes.len() })?;
        Ok(Self(array))
    }
}

/// Errors that can occur when converting a string or a byte slice into an `InfoHash`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid info-hash length: got {len} characters, expected {INFO_HASH_HEX_LEN} (hex) or {INFO_HASH_BASE32_LEN} (base32)")]
    InvalidLength { len: usize },
    #[error("invalid info-hash byte length: got {len} bytes, expected {INFO_HASH_BYTES_LEN}")]
    InvalidByteLength { len: usize },
    #[error("invalid hexadecimal info-hash: {value}")]
    InvalidHex { value: String },
    #[error("invalid base32 info-hash: {value}")]
    InvalidBase32 { value: String },
}

impl serde::ser::Serialize for InfoHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::de::Deserialize<'de> for InfoHash {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        des.deserialize_str(InfoHashVisitor)
    }
}

struct InfoHashVisitor;

impl<'v> serde::de::Visitor<'v> for InfoHashVisitor {
    type Value = InfoHash;

    fn expecting(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "a 40 character long hash")
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse()
            .map_err(|_| serde::de::Error::invalid_value(serde::de::Unexpected::Str(v), &"a 40 character long hex string"))
    }
}
