//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::time::Duration;

use crate::core::{Config, Result, ServerState};
use crate::services::{build_router, serve};

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Run until Ctrl-C
    pub async fn run(&self) -> Result<()> {
        let app = build_router(self.state.clone());

        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
        };

        serve(
            app,
            self.config.http_port,
            shutdown,
            Duration::from_millis(self.config.shutdown_timeout_ms),
        )
        .await
    }
}
