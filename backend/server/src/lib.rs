//! Documentation of a hot sauce catalog service.
//!
//!
//!
//! # General Infrastructure
//! - Single axum server exposing `/api/hotsauces`
//! - Handlers talk to a [`HotSauceRepository`](repository::HotSauceRepository), never to a store directly
//! - Store is picked at startup: in-memory (default) or Redis
//! - Nine seed sauces are written through the repository on boot when the store is empty
//!
//!
//!
//! # Endpoints
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | `/api/hotsauces` | 200 + filtered list | 400 on a non-numeric heat bound |
//! | GET | `/api/hotsauces/count` | 200 + count | |
//! | GET | `/api/hotsauces/test` | 200 + `Yup, it works!` | |
//! | GET | `/api/hotsauces/{id}` | 200 + sauce | 404 |
//! | POST | `/api/hotsauces` | 201 + created sauce | 400 on a malformed body |
//! | PUT | `/api/hotsauces/{id}` | 200 + merged sauce | 404, 400 on a malformed body |
//! | DELETE | `/api/hotsauces/{id}` | 204 | 404 |
//!
//! List filters are documented in [`search`], partial updates in [`sauce`].
//!
//!
//!
//! # Notes
//!
//! ## Concurrency
//! Nothing here coordinates writers. Two PUTs to the same id both read, merge and save, and the
//! later save wins. Acceptable for a low-volume catalog.
//!
//! ## Redis
//! The whole catalog is one hash, see [`database`]. Listing pulls every record and filters in
//! process, which is fine for a few dozen sauces.
//!
//!
//!
//! # Setup
//!
//! Environment variables:
//! - `RUST_PORT` (default `8080`)
//! - `STORE_BACKEND`: `memory` or `redis` (default `memory`)
//! - `REDIS_URL` (default `redis://127.0.0.1:6379`)
//! - `SEED_DATA`: `true` or `false` (default `true`)
//! - `RUST_LOG`: tracing filter, e.g. `info` or `hotsauce_server=debug`
//!
//! Run.
//! ```sh
//! RUST_LOG=info cargo run -p hotsauces
//! ```
//!
//! Smoke test a running server.
//! ```sh
//! cargo run -p tester -- --base-url http://localhost:8080
//! ```
//!
//! Filter by hand.
//! ```sh
//! curl "http://localhost:8080/api/hotsauces?brandNameFilter=truff&minHeat=3000"
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod repository;
pub mod routes;
pub mod sauce;
pub mod search;
pub mod seed;
pub mod state;
pub mod utils;

use config::Config;
use error::StartupError;
use routes::{
    count_handler, create_handler, delete_handler, get_handler, list_handler, test_handler,
    update_handler,
};
use state::AppState;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/hotsauces", get(list_handler).post(create_handler))
        .route("/api/hotsauces/count", get(count_handler))
        .route("/api/hotsauces/test", get(test_handler))
        .route(
            "/api/hotsauces/{id}",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() -> Result<(), StartupError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading config...");
    let config = Config::load()?;

    info!("Initializing state...");
    let state = AppState::new(config).await?;

    info!("Starting server...");

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
