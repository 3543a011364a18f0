// crates/trustboard-rpc/src/server.rs
//
// HTTP server setup: TrustboardRpcServer and RpcConfig.
//
// Routes:
//   GET    /leaderboard?direction=desc&limit=N
//   GET    /influencers/:id        PUT (profile)   DELETE (deactivate)
//   GET    /influencers/:id/claims
//   POST   /claims
//   GET    /claims/:id             PATCH (settle)
//   GET    /stats
//   GET    /health

use std::future::Future;
use std::net::SocketAddr;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};

use trustboard_service::TrustService;

use crate::handlers;
use crate::middleware;

// ---------------------------------------------------------------------------
// RpcConfig
// ---------------------------------------------------------------------------

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcConfig {
    /// Host to bind to (e.g., "127.0.0.1" or "0.0.0.0").
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// ---------------------------------------------------------------------------
// Shared handler state
// ---------------------------------------------------------------------------

/// State handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: TrustService,
    /// Server start time for uptime reporting.
    pub start_time: Instant,
}

// ---------------------------------------------------------------------------
// TrustboardRpcServer
// ---------------------------------------------------------------------------

/// The HTTP server for Trustboard.
#[derive(Debug, Clone)]
pub struct TrustboardRpcServer {
    config: RpcConfig,
    service: TrustService,
    start_time: Instant,
}

impl TrustboardRpcServer {
    /// Create a new server over a wired `TrustService`.
    pub fn new(config: RpcConfig, service: TrustService) -> Self {
        Self {
            config,
            service,
            start_time: Instant::now(),
        }
    }

    /// Set the process start time used for uptime reporting.
    pub fn with_start_time(mut self, start_time: Instant) -> Self {
        self.start_time = start_time;
        self
    }

    /// Build the axum router with all routes and middleware attached.
    pub fn router(&self) -> Router {
        let state = AppState {
            service: self.service.clone(),
            start_time: self.start_time,
        };

        Router::new()
            // Leaderboard
            .route("/leaderboard", get(handlers::leaderboard::handle_get_leaderboard))
            .route("/stats", get(handlers::leaderboard::handle_get_stats))
            // Influencers
            .route(
                "/influencers/:id",
                get(handlers::influencer::handle_get_influencer)
                    .put(handlers::influencer::handle_update_profile)
                    .delete(handlers::influencer::handle_deactivate),
            )
            .route(
                "/influencers/:id/claims",
                get(handlers::influencer::handle_list_claims),
            )
            // Claims
            .route("/claims", post(handlers::claim::handle_submit_claim))
            .route(
                "/claims/:id",
                get(handlers::claim::handle_get_claim).patch(handlers::claim::handle_settle_claim),
            )
            // Node
            .route("/health", get(handlers::node::handle_get_health))
            .layer(axum::middleware::from_fn(middleware::log_requests))
            .with_state(state)
    }

    /// Start the server and serve requests until `shutdown` resolves.
    pub async fn start_with_shutdown<F>(&self, shutdown: F) -> Result<(), Box<dyn std::error::Error>>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!("Trustboard HTTP server listening on {}", addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("Trustboard HTTP server stopped");
        Ok(())
    }

    /// Start the server and serve until the process receives Ctrl-C.
    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.start_with_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
    }
}
