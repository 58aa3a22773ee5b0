//! Capability-addressed object storage for the fakegrid test double.
//!
//! This crate implements the grid's key-value half: a mapping from
//! [`Capability`](fakegrid_types::Capability) string to raw byte payload.
//! Unlike a content-addressed store, the key is minted by the capability
//! generator rather than derived from the payload, which changes the
//! duplicate-write contract:
//!
//! # Design Rules
//!
//! 1. Records are immutable once written and are never overwritten.
//! 2. Inserting an already-present capability is an invariant violation
//!    ([`StoreError::DuplicateCapability`]) — it signals a regression in
//!    the generator, so it fails loudly instead of being absorbed.
//! 3. Reading an absent capability is not an error: it is an ordinary,
//!    client-visible outcome and returns `Ok(None)`.
//! 4. Reads never mutate the store.
//!
//! The one backend, [`InMemoryGridStore`], lives entirely in memory and is
//! discarded with its owner; every constructed store is isolated.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryGridStore;
pub use traits::GridStore;
