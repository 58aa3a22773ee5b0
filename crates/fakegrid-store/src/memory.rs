use std::collections::HashMap;
use std::sync::RwLock;

use bytes::Bytes;
use fakegrid_types::Capability;

use crate::error::{StoreError, StoreResult};
use crate::traits::GridStore;

/// In-memory, HashMap-based grid store.
///
/// The only backend the double needs: all records are held in memory behind
/// a `RwLock` for safe concurrent access and discarded with the instance.
/// Payloads are `Bytes`, so reads hand out cheap reference-counted clones.
pub struct InMemoryGridStore {
    records: RwLock<HashMap<Capability, Bytes>>,
}

impl InMemoryGridStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store has never received any data.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Total payload bytes across all records.
    pub fn total_bytes(&self) -> u64 {
        self.records
            .read()
            .expect("lock poisoned")
            .values()
            .map(|data| data.len() as u64)
            .sum()
    }

    /// Return a sorted list of every stored capability.
    pub fn all_capabilities(&self) -> Vec<Capability> {
        let map = self.records.read().expect("lock poisoned");
        let mut caps: Vec<Capability> = map.keys().cloned().collect();
        caps.sort();
        caps
    }
}

impl Default for InMemoryGridStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GridStore for InMemoryGridStore {
    fn put(&self, cap: Capability, data: Bytes) -> StoreResult<Capability> {
        let mut map = self.records.write().expect("lock poisoned");
        if map.contains_key(&cap) {
            return Err(StoreError::DuplicateCapability(cap));
        }
        tracing::debug!(capability = %cap, bytes = data.len(), "stored object");
        map.insert(cap.clone(), data);
        Ok(cap)
    }

    fn get(&self, cap: &Capability) -> StoreResult<Option<Bytes>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.get(cap).cloned())
    }

    fn contains(&self, cap: &Capability) -> StoreResult<bool> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.contains_key(cap))
    }
}

impl std::fmt::Debug for InMemoryGridStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryGridStore")
            .field("record_count", &count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakegrid_caps::CapabilityGenerator;
    use fakegrid_types::CapabilityKind;
    use proptest::prelude::*;

    fn mint(kind: CapabilityKind) -> Capability {
        CapabilityGenerator::new(kind).next_capability()
    }

    // -----------------------------------------------------------------------
    // Round trip
    // -----------------------------------------------------------------------

    #[test]
    fn put_and_get_roundtrip() {
        let store = InMemoryGridStore::new();
        let cap = mint(CapabilityKind::Chk);
        let returned = store.put(cap.clone(), Bytes::from_static(b"some data")).unwrap();
        assert_eq!(returned, cap);

        let data = store.get(&cap).unwrap().expect("should exist");
        assert_eq!(data, Bytes::from_static(b"some data"));
    }

    #[test]
    fn repeated_gets_return_identical_bytes() {
        let store = InMemoryGridStore::new();
        let cap = mint(CapabilityKind::Chk);
        store.put(cap.clone(), Bytes::from_static(b"stable")).unwrap();

        let first = store.get(&cap).unwrap().unwrap();
        let second = store.get(&cap).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_payload_roundtrips() {
        let store = InMemoryGridStore::new();
        let cap = mint(CapabilityKind::Lit);
        store.put(cap.clone(), Bytes::new()).unwrap();
        assert_eq!(store.get(&cap).unwrap().unwrap().len(), 0);
    }

    // -----------------------------------------------------------------------
    // Duplicate invariant
    // -----------------------------------------------------------------------

    #[test]
    fn duplicate_put_fails_loudly() {
        let store = InMemoryGridStore::new();
        let cap = mint(CapabilityKind::Chk);
        store.put(cap.clone(), Bytes::from_static(b"first")).unwrap();

        let err = store
            .put(cap.clone(), Bytes::from_static(b"second"))
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateCapability(_)));
        assert_eq!(err.to_string(), format!("already have '{cap}'"));

        // The original record is untouched.
        assert_eq!(
            store.get(&cap).unwrap().unwrap(),
            Bytes::from_static(b"first")
        );
        assert_eq!(store.len(), 1);
    }

    // -----------------------------------------------------------------------
    // Miss behavior
    // -----------------------------------------------------------------------

    #[test]
    fn get_on_absent_capability_returns_none() {
        let store = InMemoryGridStore::new();
        let cap = mint(CapabilityKind::Chk);
        assert!(store.get(&cap).unwrap().is_none());
        // A miss does not mutate the store.
        assert!(store.is_empty());
    }

    #[test]
    fn contains_tracks_presence() {
        let store = InMemoryGridStore::new();
        let cap = mint(CapabilityKind::Dir2Chk);
        assert!(!store.contains(&cap).unwrap());
        store.put(cap.clone(), Bytes::from_static(b"dir")).unwrap();
        assert!(store.contains(&cap).unwrap());
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_is_empty_and_total_bytes() {
        let store = InMemoryGridStore::new();
        assert!(store.is_empty());

        let mut gen = CapabilityGenerator::new(CapabilityKind::Chk);
        store.put(gen.next_capability(), Bytes::from_static(b"12345")).unwrap();
        store.put(gen.next_capability(), Bytes::from_static(b"123456789")).unwrap();

        assert!(!store.is_empty());
        assert_eq!(store.len(), 2);
        assert_eq!(store.total_bytes(), 14);
    }

    #[test]
    fn all_capabilities_is_sorted() {
        let store = InMemoryGridStore::new();
        let mut gen = CapabilityGenerator::new(CapabilityKind::Chk);
        for _ in 0..3 {
            store.put(gen.next_capability(), Bytes::from_static(b"x")).unwrap();
        }

        let caps = store.all_capabilities();
        assert_eq!(caps.len(), 3);
        for w in caps.windows(2) {
            assert!(w[0] <= w[1]);
        }
    }

    #[test]
    fn default_creates_empty_store() {
        let store = InMemoryGridStore::default();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryGridStore::new();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryGridStore"));
        assert!(debug.contains("record_count"));
    }

    // -----------------------------------------------------------------------
    // Concurrent read safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryGridStore::new());
        let cap = mint(CapabilityKind::Chk);
        store.put(cap.clone(), Bytes::from_static(b"shared data")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let cap = cap.clone();
                thread::spawn(move || {
                    let data = store.get(&cap).unwrap();
                    assert_eq!(data, Some(Bytes::from_static(b"shared data")));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    // -----------------------------------------------------------------------
    // Round-trip property
    // -----------------------------------------------------------------------

    proptest! {
        // Any byte payload reads back exactly as written.
        #[test]
        fn any_payload_roundtrips(payload in proptest::collection::vec(any::<u8>(), 0..1024)) {
            let store = InMemoryGridStore::new();
            let cap = mint(CapabilityKind::Chk);
            store.put(cap.clone(), Bytes::from(payload.clone())).unwrap();
            let got = store.get(&cap).unwrap().unwrap();
            prop_assert_eq!(got.as_ref(), payload.as_slice());
        }
    }
}
