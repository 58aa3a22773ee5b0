use fakegrid_types::Capability;

/// Errors from grid store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Attempted to insert a capability that is already present.
    ///
    /// Capabilities are minted unique, so hitting this means the generator
    /// produced a repeat. Callers must not catch and suppress it.
    #[error("already have '{0}'")]
    DuplicateCapability(Capability),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
