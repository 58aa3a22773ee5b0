use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::root::GridRoot;

/// Serves one grid double on a real listener.
///
/// Most tests drive [`GridRoot::router`] in-process instead; this exists
/// for clients that need an actual socket.
pub struct GridServer {
    config: ServerConfig,
    root: GridRoot,
}

impl GridServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            root: GridRoot::new(),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The grid behind this server, for fixture setup before serving.
    pub fn root(&self) -> &GridRoot {
        &self.root
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.root.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("fakegrid listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
