//! Cursor-based reader over a payload.

use alloc::{borrow::Cow, string::String};

use base64::{
    DecodeError, Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use thiserror::Error;

use super::{Encoded, LongWords};

/// Standard alphabet, accepting text with or without `=` padding.
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// An error reading a value from a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// A read requested more bytes than remain.
    #[error("Buffer overflow: requested {requested} bytes with {remaining} remaining.")]
    BufferOverflow { requested: usize, remaining: usize },
    /// A text field does not hold valid UTF-8.
    #[error("Malformed text: {0}.")]
    MalformedText(#[from] core::str::Utf8Error),
}

/// A bounds-checked, big-endian reader over an immutable byte buffer.
///
/// The cursor only moves forward, and never past the end of the buffer. A
/// failed read leaves it where it was.
#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: Cow<'a, [u8]>,
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Create a reader over raw bytes.
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf: Cow::Borrowed(buf),
            pos: 0,
        }
    }

    /// Create a reader over the bytes of standard base64 text, padded or not.
    pub fn from_base64(text: &str) -> Result<ByteReader<'static>, DecodeError> {
        let buf = FORGIVING.decode(text)?;

        Ok(ByteReader {
            buf: Cow::Owned(buf),
            pos: 0,
        })
    }

    /// Create a reader over an encoded payload, decoding base64 text if
    /// necessary.
    pub fn from_encoded(encoded: &'a Encoded) -> Result<Self, DecodeError> {
        match encoded {
            Encoded::Base64(text) => Self::from_base64(text),
            Encoded::Bytes(bytes) => Ok(Self::new(bytes)),
        }
    }

    /// The number of bytes read so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn read_byte(&mut self) -> Result<u8, ReadError> {
        let [b] = self.take()?;
        Ok(b)
    }

    /// Read a byte, true if nonzero.
    pub fn read_boolean(&mut self) -> Result<bool, ReadError> {
        Ok(self.read_byte()? != 0)
    }

    pub fn read_unsigned_short(&mut self) -> Result<u16, ReadError> {
        Ok(u16::from_be_bytes(self.take()?))
    }

    pub fn read_int(&mut self) -> Result<i32, ReadError> {
        Ok(i32::from_be_bytes(self.take()?))
    }

    /// Read a 64-bit value stored as a signed high word and an unsigned low
    /// word.
    pub fn read_long(&mut self) -> Result<u64, ReadError> {
        let words: LongWords = zerocopy::transmute!(self.take::<8>()?);
        Ok(words.join())
    }

    /// Read a text field: a `u16` byte length followed by UTF-8.
    ///
    /// The cursor is not moved if the text is truncated. Invalid UTF-8 is
    /// consumed and rejected.
    pub fn read_utf(&mut self) -> Result<String, ReadError> {
        let start = self.pos;
        let len = self.read_unsigned_short()? as usize;

        let range = match self.advance(len) {
            Ok(s) => s..s + len,
            Err(err) => {
                self.pos = start;
                return Err(err);
            }
        };

        let text = core::str::from_utf8(&self.buf[range])?;
        Ok(String::from(text))
    }

    /// Take an exact number of bytes from the cursor.
    fn take<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let s = self.advance(N)?;

        let mut bytes = [0; N];
        bytes.copy_from_slice(&self.buf[s..s + N]);
        Ok(bytes)
    }

    /// Move the cursor forward, returning its previous offset.
    fn advance(&mut self, n: usize) -> Result<usize, ReadError> {
        let remaining = self.remaining();

        if n > remaining {
            Err(ReadError::BufferOverflow {
                requested: n,
                remaining,
            })?;
        }

        let s = self.pos;
        self.pos += n;
        Ok(s)
    }
}
