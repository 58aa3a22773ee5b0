//! Byte-safe JSON encoding.
//!
//! JSON has no byte-string type, but grid payloads and capability tables
//! routinely carry raw byte sequences where a string belongs — as mapping
//! keys, as values, nested arbitrarily deep. This crate encodes such
//! structures by converting every byte sequence to text on the way out.
//!
//! Two modes, selected by [`Mode`]:
//!
//! - [`Mode::Strict`] — byte sequences must be valid UTF-8, otherwise
//!   encoding fails with [`EncodeError::NonUtf8`].
//! - [`Mode::Lenient`] — non-UTF-8 bytes are escaped as `\xNN` for human
//!   consumption instead of failing.
//!
//! The input is a [`BytesValue`] tree; conversion recurses uniformly
//! through mappings, sequences, and set-like collections.

pub mod encode;
pub mod error;
pub mod value;

pub use encode::{dumps, dumps_bytes, to_value, Mode};
pub use error::EncodeError;
pub use value::{BytesValue, MapKey};
