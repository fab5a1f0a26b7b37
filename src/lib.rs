#![no_std]

//! A decoder for versioned, length-prefixed audio track records.
//!
//! A track record is a short big-endian message: a reserved flags word, a
//! format version byte, and a sequence of fields whose order depends on the
//! version. Records usually travel as standard base64 text.
//!
//! Most users should begin with [`track::decode`] and [`track::encode`]. The
//! primitives these are built on live in the [`wire`] module, along with the
//! [`Layout`](macro@wire::Layout) derive macro for declaring field sequences.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoding and `std` error impls (default).
//! - `serde`: implement `Serialize` and `Deserialize` for decoded records.

extern crate alloc;

// Allows the derive macro's absolute paths to resolve inside this crate.
extern crate self as trackwire;

pub mod track;
pub mod wire;
