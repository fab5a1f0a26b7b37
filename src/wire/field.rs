//! Values with a fixed wire representation.

use alloc::string::String;

use super::{ByteReader, ByteWriter, ReadError, WriteError};

/// A value that can be read from and written to the wire.
///
/// Optional values are stored as a presence flag followed, if set, by the
/// value itself.
pub trait WireField: Sized {
    /// Read a value from the cursor.
    fn read(r: &mut ByteReader<'_>) -> Result<Self, ReadError>;
    /// Write a value to the end of the writer.
    fn write(&self, w: &mut ByteWriter) -> Result<(), WriteError>;
}

macro_rules! wire_field {
    ($t:ty, $read:ident, $write:ident, $(#[$attr:meta])*) => {
        $(#[$attr])*
        impl WireField for $t {
            fn read(r: &mut ByteReader<'_>) -> Result<Self, ReadError> {
                r.$read()
            }

            fn write(&self, w: &mut ByteWriter) -> Result<(), WriteError> {
                w.$write(*self);
                Ok(())
            }
        }
    };
}

wire_field!(u8, read_byte, write_byte, /** A single byte. */);
wire_field!(bool, read_boolean, write_boolean, /** A byte, true if nonzero. */);
wire_field!(u16, read_unsigned_short, write_unsigned_short, /** A big-endian `u16`. */);
wire_field!(i32, read_int, write_int, /** A big-endian `i32`. */);
wire_field!(u64, read_long, write_long, /** A long: signed high word, unsigned low word. */);

/// A `u16` byte length followed by UTF-8.
impl WireField for String {
    fn read(r: &mut ByteReader<'_>) -> Result<Self, ReadError> {
        r.read_utf()
    }

    fn write(&self, w: &mut ByteWriter) -> Result<(), WriteError> {
        w.write_utf(self)
    }
}

/// A presence flag, followed by the value if set.
impl<T: WireField> WireField for Option<T> {
    fn read(r: &mut ByteReader<'_>) -> Result<Self, ReadError> {
        if r.read_boolean()? {
            Ok(Some(T::read(r)?))
        } else {
            Ok(None)
        }
    }

    fn write(&self, w: &mut ByteWriter) -> Result<(), WriteError> {
        w.write_boolean(self.is_some());

        match self {
            Some(value) => value.write(w),
            None => Ok(()),
        }
    }
}
