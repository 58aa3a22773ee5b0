use std::sync::Arc;

use axum::Router;
use bytes::Bytes;
use fakegrid_store::StoreResult;
use fakegrid_types::{Capability, CapabilityKind};

use crate::router::build_router;
use crate::state::{GridState, SharedGridState};

/// Composition root for one grid double.
///
/// Owns the grid's state and binds the verb handlers under `/uri`. Each
/// `GridRoot` is an isolated grid: construct one per test for
/// order-independent, deterministic capability sequences.
pub struct GridRoot {
    state: SharedGridState,
}

impl GridRoot {
    /// Create an isolated grid double.
    pub fn new() -> Self {
        Self {
            state: Arc::new(GridState::new()),
        }
    }

    /// The axum router serving this grid. May be called repeatedly; all
    /// routers share this root's state.
    pub fn router(&self) -> Router {
        build_router(Arc::clone(&self.state))
    }

    /// Pre-populate the store without going through the HTTP path.
    ///
    /// Fixture helper: mints a capability of `kind` for `data` exactly as
    /// the corresponding verb handler would.
    pub fn add_data(&self, kind: CapabilityKind, data: impl Into<Bytes>) -> StoreResult<Capability> {
        self.state.add_data(kind, data.into())
    }

    /// Shared handle to the underlying state.
    pub fn state(&self) -> SharedGridState {
        Arc::clone(&self.state)
    }
}

impl Default for GridRoot {
    fn default() -> Self {
        Self::new()
    }
}
