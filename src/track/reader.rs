//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, vec::Vec};

use thiserror::Error;

use super::TrackRecord;

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum ReaderError {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The bytes read do not hold a valid record.
    #[error(transparent)]
    Decode(#[from] super::Error),
}

/// Decode a record from the raw bytes of a reader, read to its end.
///
/// This method is also re-exported as `trackwire::track::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read) -> Result<TrackRecord, ReaderError> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;

    Ok(super::decode(buf)?)
}
