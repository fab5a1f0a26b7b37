//! Big-endian wire primitives.
//!
//! A [`ByteReader`] walks a payload front to back, and a [`ByteWriter`] builds
//! one in the same order. Composite values are described by the [`WireField`]
//! trait, and a whole field sequence by the [`Layout`] trait, which is usually
//! derived:
//!
//! ```
//! #[derive(Layout)]
//! struct Chapter {
//!     title: String,
//!     start: u64,
//!     artwork: Option<String>,
//!     #[wire(skip)]
//!     position: u64,
//! }
//! ```
//!
//! Fields are read and written in declaration order. A field marked
//! `#[wire(skip)]` is not on the wire: it takes its [`Default`] value when
//! read and is ignored when written.

pub mod encoded;
pub mod field;
pub mod reader;
pub mod writer;

pub use encoded::Encoded;
pub use field::WireField;
pub use reader::{ByteReader, ReadError};
pub use writer::{ByteWriter, WriteError};

/// Derive [`Layout`] for a struct with named fields.
pub use trackwire_derive::Layout;

use zerocopy::{
    FromBytes, Immutable, IntoBytes,
    byteorder::{BigEndian, I32, U32},
};

/// An ordered sequence of fields read from and written to the wire.
///
/// See the [`Layout`](macro@Layout) derive macro for an automatic
/// implementation of this trait.
pub trait Layout: Sized {
    /// Read every field, in order, from the reader.
    fn read_fields(r: &mut ByteReader<'_>) -> Result<Self, ReadError>;
    /// Write every field, in order, to the writer.
    fn write_fields(&self, w: &mut ByteWriter) -> Result<(), WriteError>;
}

/// A 64-bit value as stored on the wire: two big-endian 32-bit words, the
/// high one signed.
#[repr(C)]
#[derive(FromBytes, IntoBytes, Immutable)]
pub(crate) struct LongWords {
    high: I32<BigEndian>,
    low: U32<BigEndian>,
}

impl LongWords {
    pub(crate) fn split(value: u64) -> Self {
        Self {
            high: I32::new((value >> 32) as u32 as i32),
            low: U32::new(value as u32),
        }
    }

    pub(crate) fn join(&self) -> u64 {
        // Reinterpret the signed high word's bits; never widen through a float.
        (u64::from(self.high.get() as u32) << 32) | u64::from(self.low.get())
    }
}
