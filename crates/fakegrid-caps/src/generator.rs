use std::collections::HashMap;

use fakegrid_types::capability::{DIGEST_LEN, KEY_LEN};
use fakegrid_types::{Capability, CapabilityKind};

/// Scale applied to the ordinal counter to produce the `size` field.
///
/// The size field is a monotonic placeholder, not the stored payload's
/// length: the first capability of a kind carries `size=1000`, the second
/// `size=2000`, and so on.
pub const SIZE_SCALE: u64 = 1000;

/// Erasure-coding shape emitted by the double. A real grid would split an
/// object into `N` shares with any `K` sufficient to reconstruct; the
/// double stores whole payloads, so both are fixed at 1.
const SHARES_N: u32 = 1;
const SHARES_K: u32 = 1;

/// Deterministic producer of capability strings for a single kind.
///
/// State is an ordinal counter plus two independent rolling BLAKE3
/// accumulators, one feeding the key segment and one the digest segment.
/// Every mint feeds a single zero byte into each accumulator and reads
/// their current digests, so the sequence advances deterministically and
/// never repeats. A seed could be mixed into the accumulators to produce
/// different sequences, but reproducibility is the point of the double.
pub struct CapabilityGenerator {
    kind: CapabilityKind,
    ordinal: u64,
    key_hasher: blake3::Hasher,
    digest_hasher: blake3::Hasher,
}

impl CapabilityGenerator {
    /// Create a fresh generator for `kind`, positioned before the first
    /// capability of the sequence.
    pub fn new(kind: CapabilityKind) -> Self {
        Self {
            kind,
            ordinal: 0,
            key_hasher: blake3::Hasher::new(),
            digest_hasher: blake3::Hasher::new(),
        }
    }

    /// The kind this generator mints.
    pub fn kind(&self) -> CapabilityKind {
        self.kind
    }

    /// How many capabilities have been minted so far.
    pub fn minted(&self) -> u64 {
        self.ordinal
    }

    /// Mint the next capability in the sequence.
    ///
    /// Infallible: the kind was validated at construction and the hash
    /// state advances without I/O.
    pub fn next_capability(&mut self) -> Capability {
        self.ordinal += 1;
        self.key_hasher.update(&[0u8]);
        self.digest_hasher.update(&[0u8]);

        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&self.key_hasher.finalize().as_bytes()[..KEY_LEN]);
        let digest: [u8; DIGEST_LEN] = *self.digest_hasher.finalize().as_bytes();

        Capability::from_parts(
            self.kind,
            &key,
            &digest,
            SHARES_N,
            SHARES_K,
            self.ordinal * SIZE_SCALE,
        )
    }
}

impl Iterator for CapabilityGenerator {
    type Item = Capability;

    // The sequence is unbounded; `next` always yields.
    fn next(&mut self) -> Option<Capability> {
        Some(self.next_capability())
    }
}

impl std::fmt::Debug for CapabilityGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityGenerator")
            .field("kind", &self.kind)
            .field("minted", &self.ordinal)
            .finish()
    }
}

/// Lazily constructed generator per capability kind.
///
/// Each kind gets its own [`CapabilityGenerator`] on first request and
/// keeps it for the lifetime of this value, so sequences for different
/// kinds advance independently.
#[derive(Debug, Default)]
pub struct KindGenerators {
    generators: HashMap<CapabilityKind, CapabilityGenerator>,
}

impl KindGenerators {
    /// Create an empty set. Generators materialize on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next capability of `kind`.
    pub fn next_capability(&mut self, kind: CapabilityKind) -> Capability {
        self.generators
            .entry(kind)
            .or_insert_with(|| CapabilityGenerator::new(kind))
            .next_capability()
    }

    /// How many capabilities have been minted for `kind`.
    pub fn minted(&self, kind: CapabilityKind) -> u64 {
        self.generators.get(&kind).map_or(0, |g| g.minted())
    }
}
