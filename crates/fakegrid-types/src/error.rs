use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// The requested kind is not a member of the known-kinds set.
    #[error("unknown capability kind '{kind}' (valid are {valid})")]
    UnknownKind { kind: String, valid: String },

    /// The capability string does not match the expected structure.
    #[error("malformed capability '{cap}': {reason}")]
    MalformedCapability { cap: String, reason: String },
}
