//! Field sequences for each supported version.
//!
//! The order of the fields in each struct is the order on the wire and must
//! not change. Every layout shares the same fields so that conversions are
//! uniform; those a version does not carry are skipped.

use alloc::string::String;

use crate::wire::{ByteReader, ByteWriter, Layout, ReadError, WriteError};

use super::{Encoded, TrackRecord, Version};

/// The version 0 field sequence.
#[derive(Debug, Clone, PartialEq, Eq, Layout)]
pub struct LayoutV0 {
    pub title: String,
    pub author: String,
    pub length: u64,
    pub identifier: String,
    pub is_stream: bool,
    pub uri: Option<String>,
    pub thumbnail: Option<String>,
    #[wire(skip)]
    pub isrc: Option<String>,
    pub source: String,
}

/// The version 2 field sequence, which has no thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Layout)]
pub struct LayoutV2 {
    pub title: String,
    pub author: String,
    pub length: u64,
    pub identifier: String,
    pub is_stream: bool,
    pub uri: Option<String>,
    #[wire(skip)]
    pub thumbnail: Option<String>,
    #[wire(skip)]
    pub isrc: Option<String>,
    pub source: String,
}

/// The version 3 field sequence.
#[derive(Debug, Clone, PartialEq, Eq, Layout)]
pub struct LayoutV3 {
    pub title: String,
    pub author: String,
    pub length: u64,
    pub identifier: String,
    pub is_stream: bool,
    pub uri: Option<String>,
    pub thumbnail: Option<String>,
    pub isrc: Option<String>,
    pub source: String,
}

macro_rules! layout_conversions {
    ($($t:ident),*) => {
        $(
            impl $t {
                fn into_record(self, track_id: Encoded) -> TrackRecord {
                    TrackRecord {
                        track_id,
                        title: self.title,
                        author: self.author,
                        length: self.length,
                        identifier: self.identifier,
                        is_stream: self.is_stream,
                        uri: self.uri,
                        thumbnail: self.thumbnail,
                        isrc: self.isrc,
                        source: self.source,
                        position: 0,
                        requester: None,
                    }
                }

                fn from_record(record: &TrackRecord) -> Self {
                    Self {
                        title: record.title.clone(),
                        author: record.author.clone(),
                        length: record.length,
                        identifier: record.identifier.clone(),
                        is_stream: record.is_stream,
                        uri: record.uri.clone(),
                        thumbnail: record.thumbnail.clone(),
                        isrc: record.isrc.clone(),
                        source: record.source.clone(),
                    }
                }
            }
        )*
    };
}

layout_conversions!(LayoutV0, LayoutV2, LayoutV3);

/// A layout of any supported version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyLayout {
    V0(LayoutV0),
    V2(LayoutV2),
    V3(LayoutV3),
}

impl AnyLayout {
    /// Read the field sequence of a version.
    pub fn read(r: &mut ByteReader<'_>, version: Version) -> Result<Self, ReadError> {
        Ok(match version {
            Version::V0 => Self::V0(LayoutV0::read_fields(r)?),
            Version::V2 => Self::V2(LayoutV2::read_fields(r)?),
            Version::V3 => Self::V3(LayoutV3::read_fields(r)?),
        })
    }

    /// Write the field sequence of this layout's version.
    pub fn write(&self, w: &mut ByteWriter) -> Result<(), WriteError> {
        match self {
            Self::V0(l) => l.write_fields(w),
            Self::V2(l) => l.write_fields(w),
            Self::V3(l) => l.write_fields(w),
        }
    }

    /// Build the layout of a version from a record.
    ///
    /// Fields the version does not carry are copied but never written.
    pub fn from_record(record: &TrackRecord, version: Version) -> Self {
        match version {
            Version::V0 => Self::V0(LayoutV0::from_record(record)),
            Version::V2 => Self::V2(LayoutV2::from_record(record)),
            Version::V3 => Self::V3(LayoutV3::from_record(record)),
        }
    }

    /// Convert to a record, attaching the payload it was read from.
    pub fn into_record(self, track_id: Encoded) -> TrackRecord {
        match self {
            Self::V0(l) => l.into_record(track_id),
            Self::V2(l) => l.into_record(track_id),
            Self::V3(l) => l.into_record(track_id),
        }
    }
}
