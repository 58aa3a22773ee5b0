use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Listener configuration for mounting the double on a real socket.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3456".parse().expect("static address"),
        }
    }
}
