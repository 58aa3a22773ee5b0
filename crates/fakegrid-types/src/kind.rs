use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The closed set of known capability kinds.
///
/// Each kind is a namespace prefix for capability strings. The set is
/// declared statically: generation and dispatch only ever consult this
/// enum, so an unknown kind is rejected at the string boundary with an
/// error naming the valid set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CapabilityKind {
    /// Immutable file. The default kind for raw uploads.
    Chk,
    /// Literal (self-contained) file.
    Lit,
    /// Mutable file, SDMF format.
    Ssk,
    /// Mutable file, MDMF format.
    Mdmf,
    /// Mutable directory.
    Dir2,
    /// Immutable directory.
    Dir2Chk,
}

impl CapabilityKind {
    /// Every known kind, in declaration order.
    pub const ALL: [CapabilityKind; 6] = [
        CapabilityKind::Chk,
        CapabilityKind::Lit,
        CapabilityKind::Ssk,
        CapabilityKind::Mdmf,
        CapabilityKind::Dir2,
        CapabilityKind::Dir2Chk,
    ];

    /// The wire prefix for this kind, trailing colon included.
    pub const fn prefix(&self) -> &'static str {
        match self {
            CapabilityKind::Chk => "URI:CHK:",
            CapabilityKind::Lit => "URI:LIT:",
            CapabilityKind::Ssk => "URI:SSK:",
            CapabilityKind::Mdmf => "URI:MDMF:",
            CapabilityKind::Dir2 => "URI:DIR2:",
            CapabilityKind::Dir2Chk => "URI:DIR2-CHK:",
        }
    }

    /// Resolve a wire prefix back to its kind.
    ///
    /// Fails with [`TypeError::UnknownKind`] enumerating the valid set.
    pub fn from_prefix(prefix: &str) -> Result<Self, TypeError> {
        Self::ALL
            .into_iter()
            .find(|k| k.prefix() == prefix)
            .ok_or_else(|| TypeError::UnknownKind {
                kind: prefix.to_string(),
                valid: Self::valid_set(),
            })
    }

    /// Find the kind whose prefix starts the given capability string.
    pub fn matching_prefix(cap: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| cap.starts_with(k.prefix()))
    }

    /// Comma-separated list of every valid prefix, for error messages.
    pub fn valid_set() -> String {
        Self::ALL
            .iter()
            .map(|k| k.prefix())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl FromStr for CapabilityKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_prefix(s)
    }
}
