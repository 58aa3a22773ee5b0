use std::sync::{Arc, Mutex};

use bytes::Bytes;
use fakegrid_caps::KindGenerators;
use fakegrid_store::{GridStore, InMemoryGridStore, StoreResult};
use fakegrid_types::{Capability, CapabilityKind};

/// Shared handle to a grid's state, passed to handlers via the `State`
/// extractor.
pub type SharedGridState = Arc<GridState>;

/// The mutable half of the grid double: one set of per-kind capability
/// generators and one in-memory store.
///
/// There are no process-wide singletons — every `GridState` is fully
/// isolated, so multiple doubles can coexist in one test run without
/// observing each other's capabilities.
pub struct GridState {
    generators: Mutex<KindGenerators>,
    store: InMemoryGridStore,
}

impl GridState {
    /// Create an isolated grid with no stored data.
    pub fn new() -> Self {
        Self {
            generators: Mutex::new(KindGenerators::new()),
            store: InMemoryGridStore::new(),
        }
    }

    /// Mint a fresh capability of `kind` and store `data` under it.
    ///
    /// The generator lock is held across the insert, making
    /// mint-then-insert one atomic unit: a duplicate-capability error out
    /// of the store can only mean a generator regression.
    pub fn add_data(&self, kind: CapabilityKind, data: Bytes) -> StoreResult<Capability> {
        let mut generators = self.generators.lock().expect("lock poisoned");
        let cap = generators.next_capability(kind);
        tracing::debug!(capability = %cap, kind = %kind, bytes = data.len(), "minted capability");
        self.store.put(cap, data)
    }

    /// Read the payload stored under `cap`, if any. Never mutates.
    pub fn get_data(&self, cap: &Capability) -> Option<Bytes> {
        self.store
            .get(cap)
            .expect("in-memory reads are infallible")
    }

    /// The underlying store, for assertions in tests.
    pub fn store(&self) -> &InMemoryGridStore {
        &self.store
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GridState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridState")
            .field("store", &self.store)
            .finish()
    }
}
