//! Foundation types for the fakegrid test double.
//!
//! This crate provides the capability vocabulary used throughout fakegrid.
//! Every other fakegrid crate depends on `fakegrid-types`.
//!
//! # Key Types
//!
//! - [`CapabilityKind`] — Closed enumeration of known capability namespaces
//! - [`Capability`] — Self-describing identifier for a stored object
//! - [`TypeError`] — Kind-validation and capability-parsing errors
//!
//! Capabilities render as ASCII text:
//!
//! ```text
//! <kind-prefix><base32(key)>:<base32(digest)>:<N>:<K>:<size>
//! ```
//!
//! where `key` is 16 bytes, `digest` is 32 bytes, and both use lowercase
//! base32 without padding.

pub mod base32;
pub mod capability;
pub mod error;
pub mod kind;

pub use capability::Capability;
pub use error::TypeError;
pub use kind::CapabilityKind;
