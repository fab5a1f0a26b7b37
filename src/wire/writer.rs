//! Growable writer producing a payload.

use alloc::vec::Vec;

use thiserror::Error;
use zerocopy::IntoBytes;

use super::LongWords;

/// An error writing a value to a payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// Text is longer than a `u16` length prefix can describe.
    #[error("Text of {0} bytes exceeds the 65535 byte limit.")]
    TextTooLong(usize),
}

/// A big-endian writer, the counterpart of [`ByteReader`](super::ByteReader).
#[derive(Debug, Clone, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_byte(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_boolean(&mut self, value: bool) {
        self.write_byte(value as u8);
    }

    pub fn write_unsigned_short(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_int(&mut self, value: i32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    pub fn write_long(&mut self, value: u64) {
        self.buf.extend_from_slice(LongWords::split(value).as_bytes());
    }

    /// Write a text field: a `u16` byte length followed by UTF-8.
    pub fn write_utf(&mut self, value: &str) -> Result<(), WriteError> {
        let len = u16::try_from(value.len()).map_err(|_| WriteError::TextTooLong(value.len()))?;

        self.write_unsigned_short(len);
        self.buf.extend_from_slice(value.as_bytes());
        Ok(())
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
