//! # unidir API Server
//!
//! REST boundary for the unidir university-directory proxy.
//!
//! ## Endpoints
//!
//! - `GET /api/universities?country=X&name=Y` - Search universities
//! - `GET /api/countries` - Distinct country list
//! - `GET /health` - Health check
//!
//! ## Example
//!
//! ```rust,ignore
//! use unidir_api::{ApiServer, ApiConfig};
//!
//! let server = ApiServer::new(ApiConfig::default())?;
//! server.run(([0, 0, 0, 0], 3000)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod error;
mod handlers;
mod routes;
mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use unidir_core::error::Result;

/// API server for unidir.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            state: Arc::new(AppState::new(config)?),
        })
    }

    /// Creates the router with all routes and middleware configured.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("unidir API server listening on {}", addr);

        axum::serve(listener, self.router()).await
    }
}
