//! Deterministic capability generation for the fakegrid test double.
//!
//! A [`CapabilityGenerator`] yields an unbounded sequence of well-formed,
//! pairwise-distinct capability strings for one
//! [`CapabilityKind`](fakegrid_types::CapabilityKind). The
//! sequence is a pure function of the kind: two freshly constructed
//! generators produce identical sequences, which is what makes tests built
//! on the grid double reproducible.
//!
//! [`KindGenerators`] lazily owns one generator per kind, giving each kind
//! an independent sequence.
//!
//! All hashing goes through BLAKE3 — no custom digest code.

pub mod generator;

pub use generator::{CapabilityGenerator, KindGenerators, SIZE_SCALE};
