//! Payloads as received from callers.

use alloc::{
    borrow::Cow,
    string::{String, ToString},
    vec::Vec,
};
use core::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};

/// An encoded payload, kept exactly as the caller supplied it.
///
/// Text is always treated as standard base64, and bytes as already decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Encoded {
    Base64(String),
    Bytes(Vec<u8>),
}

impl Encoded {
    /// The payload as base64 text, encoding raw bytes if necessary.
    pub fn to_base64(&self) -> Cow<'_, str> {
        match self {
            Self::Base64(text) => Cow::Borrowed(text),
            Self::Bytes(bytes) => Cow::Owned(STANDARD.encode(bytes)),
        }
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl From<&str> for Encoded {
    fn from(text: &str) -> Self {
        Self::Base64(text.to_string())
    }
}

impl From<String> for Encoded {
    fn from(text: String) -> Self {
        Self::Base64(text)
    }
}

impl From<&[u8]> for Encoded {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Encoded {
    fn from(bytes: &[u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Encoded {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

// Serialized as base64 text in either form, so raw payloads come back as
// `Encoded::Base64`.
#[cfg(feature = "serde")]
impl serde::Serialize for Encoded {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Encoded {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::Base64)
    }
}
