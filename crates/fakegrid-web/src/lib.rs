//! HTTP surface of the fakegrid test double.
//!
//! Exposes one grid per [`GridRoot`] under the fixed `/uri` path with
//! three verb-dispatched operations:
//!
//! - `PUT /uri` — store the request body, answer with a fresh
//!   immutable-file capability string.
//! - `POST /uri?t=mkdir-immutable` — store the body under a fresh
//!   immutable-directory capability.
//! - `GET /uri?uri=<capability>` — answer with the stored bytes, or the
//!   text `No data for '<capability>'` when nothing is stored there.
//!
//! Each `GridRoot` owns its own generators and store, so doubles are
//! isolated and their capability sequences deterministic.

pub mod config;
pub mod error;
pub mod handler;
pub mod root;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use root::GridRoot;
pub use server::GridServer;
pub use state::{GridState, SharedGridState};
