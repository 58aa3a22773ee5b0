use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base32;
use crate::error::TypeError;
use crate::kind::CapabilityKind;

/// Byte length of the key segment of a capability.
pub const KEY_LEN: usize = 16;
/// Byte length of the digest segment of a capability.
pub const DIGEST_LEN: usize = 32;

/// A capability string: the externally visible, self-describing identifier
/// for a stored object.
///
/// Structure (ASCII, bit-exact):
///
/// ```text
/// <kind-prefix><base32(key, 16 bytes)>:<base32(digest, 32 bytes)>:<N>:<K>:<size>
/// ```
///
/// `N` and `K` are erasure-coding shape placeholders; the grid double always
/// emits `N=1, K=1`. `size` is a positive integer. Capabilities are opaque
/// to the store — equality and hashing are textual.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Capability(String);

impl Capability {
    /// Render a capability from its raw segments.
    pub fn from_parts(
        kind: CapabilityKind,
        key: &[u8; KEY_LEN],
        digest: &[u8; DIGEST_LEN],
        n: u32,
        k: u32,
        size: u64,
    ) -> Self {
        Self(format!(
            "{}{}:{}:{}:{}:{}",
            kind.prefix(),
            base32::encode(key),
            base32::encode(digest),
            n,
            k,
            size,
        ))
    }

    /// Parse and structurally validate a capability string.
    ///
    /// Checks the kind prefix against the known set, the base32 alphabet
    /// and lengths of the key and digest segments, and that `N`, `K`, and
    /// `size` are positive integers.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        let malformed = |reason: &str| TypeError::MalformedCapability {
            cap: s.to_string(),
            reason: reason.to_string(),
        };

        let kind = CapabilityKind::matching_prefix(s).ok_or_else(|| TypeError::UnknownKind {
            kind: s.to_string(),
            valid: CapabilityKind::valid_set(),
        })?;

        let tail = &s[kind.prefix().len()..];
        let segments: Vec<&str> = tail.split(':').collect();
        let &[key, digest, n, k, size] = segments.as_slice() else {
            return Err(malformed("expected key:digest:N:K:size after the kind prefix"));
        };

        if key.len() != base32::encoded_len(KEY_LEN) || !base32::is_valid(key) {
            return Err(malformed("key segment is not 26 base32 characters"));
        }
        if digest.len() != base32::encoded_len(DIGEST_LEN) || !base32::is_valid(digest) {
            return Err(malformed("digest segment is not 52 base32 characters"));
        }
        for (name, field) in [("N", n), ("K", k), ("size", size)] {
            match field.parse::<u64>() {
                Ok(v) if v > 0 => {}
                _ => return Err(malformed(&format!("{name} is not a positive integer"))),
            }
        }

        Ok(Self(s.to_string()))
    }

    /// The capability text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// The kind this capability belongs to, if its prefix is recognized.
    pub fn kind(&self) -> Option<CapabilityKind> {
        CapabilityKind::matching_prefix(&self.0)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Capability({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample(kind: CapabilityKind, size: u64) -> Capability {
        Capability::from_parts(kind, &[0x11; KEY_LEN], &[0x22; DIGEST_LEN], 1, 1, size)
    }

    #[test]
    fn from_parts_structure() {
        let cap = sample(CapabilityKind::Chk, 1000);
        let text = cap.as_str();
        assert!(text.starts_with("URI:CHK:"));
        assert!(text.ends_with(":1:1:1000"));

        let tail = &text["URI:CHK:".len()..];
        let segments: Vec<&str> = tail.split(':').collect();
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0].len(), 26);
        assert_eq!(segments[1].len(), 52);
    }

    #[test]
    fn parse_accepts_generated_capabilities() {
        for kind in CapabilityKind::ALL {
            let cap = sample(kind, 3000);
            let parsed = Capability::parse(cap.as_str()).unwrap();
            assert_eq!(parsed, cap);
            assert_eq!(parsed.kind(), Some(kind));
        }
    }

    #[test]
    fn parse_rejects_unknown_prefix() {
        let err = Capability::parse("URI:BOGUS:aaaa:bbbb:1:1:1000").unwrap_err();
        assert!(matches!(err, TypeError::UnknownKind { .. }));
        assert!(err.to_string().contains("URI:CHK:"));
    }

    #[test]
    fn parse_rejects_wrong_segment_count() {
        let err = Capability::parse("URI:CHK:onlyonesegment").unwrap_err();
        assert!(matches!(err, TypeError::MalformedCapability { .. }));
    }

    #[test]
    fn parse_rejects_bad_key_segment() {
        let digest = base32::encode(&[0u8; DIGEST_LEN]);
        let cap = format!("URI:CHK:tooshort:{digest}:1:1:1000");
        assert!(Capability::parse(&cap).is_err());
    }

    #[test]
    fn parse_rejects_zero_size() {
        let key = base32::encode(&[0u8; KEY_LEN]);
        let digest = base32::encode(&[0u8; DIGEST_LEN]);
        let cap = format!("URI:CHK:{key}:{digest}:1:1:0");
        assert!(Capability::parse(&cap).is_err());
    }

    #[test]
    fn display_and_debug() {
        let cap = sample(CapabilityKind::Dir2Chk, 2000);
        assert_eq!(cap.to_string(), cap.as_str());
        assert!(format!("{cap:?}").starts_with("Capability(URI:DIR2-CHK:"));
    }

    #[test]
    fn serde_roundtrip() {
        let cap = sample(CapabilityKind::Ssk, 1000);
        let json = serde_json::to_string(&cap).unwrap();
        let back: Capability = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cap);
    }

    proptest! {
        // Any key/digest/size combination renders to a parseable capability.
        #[test]
        fn rendered_capabilities_always_parse(
            key in proptest::array::uniform16(any::<u8>()),
            digest in proptest::array::uniform32(any::<u8>()),
            size in 1u64..u64::MAX / 2,
        ) {
            let cap = Capability::from_parts(CapabilityKind::Chk, &key, &digest, 1, 1, size);
            prop_assert!(Capability::parse(cap.as_str()).is_ok());
        }
    }
}
