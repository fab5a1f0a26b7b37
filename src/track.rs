//! Decoding and encoding of track records.
//!
//! Every payload starts with the same header:
//!
//! ```text
//! [4 bytes: flags (i32, reserved)]
//! [1 byte : version]
//! ```
//!
//! followed by the field sequence of that version, as declared in the
//! [`layout`] module. Decoding either produces a complete [`TrackRecord`] or
//! fails; no partial records are returned.

pub mod layout;
#[cfg(feature = "std")]
pub mod reader;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;

use alloc::{string::String, vec::Vec};
use core::fmt;

use base64::{DecodeError, Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

use crate::wire::{ByteReader, ByteWriter, ReadError, WriteError};

pub use crate::wire::Encoded;
use layout::AnyLayout;

/// A supported format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Version {
    V0 = 0,
    V2 = 2,
    V3 = 3,
}

impl Version {
    /// The newest version, used when encoding by default.
    pub const LATEST: Self = Self::V3;

    /// Whether this version carries a thumbnail on the wire.
    pub fn has_thumbnail(self) -> bool {
        self != Self::V2
    }

    /// Whether this version carries an ISRC on the wire.
    pub fn has_isrc(self) -> bool {
        self == Self::V3
    }
}

/// An error identifying the format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VersionError {
    /// Version 1 is reserved and has no layout.
    #[error("Version 1 is reserved.")]
    Reserved,
    /// The version is not known.
    #[error("Unknown version ({0}).")]
    Unknown(u8),
}

impl TryFrom<u8> for Version {
    type Error = VersionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::V0),
            1 => Err(VersionError::Reserved),
            2 => Ok(Self::V2),
            3 => Ok(Self::V3),
            _ => Err(VersionError::Unknown(value)),
        }
    }
}

impl From<Version> for u8 {
    fn from(version: Version) -> Self {
        version as u8
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// A decoded track.
///
/// `position` and `requester` are not part of the encoding: decoding sets
/// them to zero and absent, and they are left for the caller to manage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TrackRecord {
    /// The payload this record was decoded from, verbatim.
    pub track_id: Encoded,
    pub title: String,
    pub author: String,
    /// Duration in milliseconds.
    pub length: u64,
    pub identifier: String,
    pub is_stream: bool,
    pub uri: Option<String>,
    /// Always absent for version 2.
    pub thumbnail: Option<String>,
    /// Present only for version 3.
    pub isrc: Option<String>,
    pub source: String,
    /// Playback position in milliseconds.
    pub position: u64,
    /// An identifier supplied by whoever asked for the track.
    pub requester: Option<u64>,
}

impl TrackRecord {
    /// Attach a requester to the record.
    pub fn with_requester(mut self, requester: u64) -> Self {
        self.requester = Some(requester);
        self
    }
}

/// Errors occurring while decoding a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The payload text is not valid base64.
    #[error("Invalid base64 payload: {0}.")]
    Base64(DecodeError),
    /// The payload ended early or held malformed text.
    #[error(transparent)]
    Read(#[from] ReadError),
    /// The version byte has no layout.
    #[error("Unsupported version: {0}")]
    UnsupportedVersion(#[from] VersionError),
}

// Not a `#[from]` source: `DecodeError` only implements `Error` under `std`.
impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Self::Base64(err)
    }
}

/// Errors occurring while encoding a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// A field could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
    /// A present field has no place in the chosen version.
    #[error("Field `{field}` cannot be encoded in version {version}.")]
    Unrepresentable {
        field: &'static str,
        version: Version,
    },
}

/// Decode a record from base64 text or raw bytes.
pub fn decode(payload: impl Into<Encoded>) -> Result<TrackRecord, Error> {
    let track_id = payload.into();
    let layout = read_layout(&track_id)?;

    Ok(layout.into_record(track_id))
}

/// Decode a record, attaching a requester to it.
pub fn decode_with_requester(
    payload: impl Into<Encoded>,
    requester: Option<u64>,
) -> Result<TrackRecord, Error> {
    let mut record = decode(payload)?;
    record.requester = requester;
    Ok(record)
}

/// Read the header and field sequence of a payload.
fn read_layout(encoded: &Encoded) -> Result<AnyLayout, Error> {
    let mut r = ByteReader::from_encoded(encoded)?;

    let _flags = r.read_int()?; // Reserved.
    let version = Version::try_from(r.read_byte()?)?;

    Ok(AnyLayout::read(&mut r, version)?)
}

/// Encode a record in the given version.
///
/// `track_id`, `position`, and `requester` are not written. Fails if the
/// record holds a field the version cannot carry.
pub fn encode(record: &TrackRecord, version: Version) -> Result<Vec<u8>, EncodeError> {
    let unrepresentable = if record.thumbnail.is_some() && !version.has_thumbnail() {
        Some("thumbnail")
    } else if record.isrc.is_some() && !version.has_isrc() {
        Some("isrc")
    } else {
        None
    };

    if let Some(field) = unrepresentable {
        Err(EncodeError::Unrepresentable { field, version })?;
    }

    let mut w = ByteWriter::new();
    w.write_int(0);
    w.write_byte(version.into());
    AnyLayout::from_record(record, version).write(&mut w)?;

    Ok(w.into_inner())
}

/// Encode a record in the given version as standard base64 text.
pub fn encode_base64(record: &TrackRecord, version: Version) -> Result<String, EncodeError> {
    Ok(STANDARD.encode(encode(record, version)?))
}
