use bytes::Bytes;
use fakegrid_types::Capability;

use crate::error::StoreResult;

/// Capability-addressed object store.
///
/// All implementations must satisfy these invariants:
/// - Records are immutable once written; `put` of an existing capability
///   fails with a duplicate error rather than overwriting.
/// - Reads are side-effect free and an absent key is `Ok(None)`, never an
///   error.
/// - The store never interprets payloads — it is a pure key-value store
///   over opaque bytes.
pub trait GridStore: Send + Sync {
    /// Insert `data` under `cap`, returning the capability on success.
    ///
    /// Fails with [`StoreError::DuplicateCapability`] if `cap` is already
    /// present.
    ///
    /// [`StoreError::DuplicateCapability`]: crate::StoreError::DuplicateCapability
    fn put(&self, cap: Capability, data: Bytes) -> StoreResult<Capability>;

    /// Read the payload stored under `cap`.
    ///
    /// Returns `Ok(None)` if the capability was never inserted.
    fn get(&self, cap: &Capability) -> StoreResult<Option<Bytes>>;

    /// Check whether a capability is present.
    fn contains(&self, cap: &Capability) -> StoreResult<bool>;
}
