//! # Registro Electoral -- server boundary
//!
//! Thin HTTP service in front of the hosted row store. The browser could
//! talk to the store directly; everything that matters here is that the
//! same field rules run server-side before any row reaches the table, and
//! that the dashboard data sits behind the admin flag.
//!
//! # Routes
//!
//! - `POST /registrations`: validate a form snapshot, insert one row
//! - `POST /admin/login`: check the admin password, hand back the flag
//! - `GET /dashboard`: flag-gated stats plus the full row list
//!
//! See [`docs`] for the client-side contract.
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderName, Method, header::CONTENT_TYPE},
    routing::{get, post},
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod docs;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;

use routes::{dashboard_handler, login_handler, registrar_handler};
use session::SESSION_HEADER;
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new();

    info!("Starting server...");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(SESSION_HEADER)])
        .max_age(Duration::from_secs(60 * 60));

    let app = Router::new()
        .route("/registrations", post(registrar_handler))
        .route("/admin/login", post(login_handler))
        .route("/dashboard", get(dashboard_handler))
        .layer(cors)
        .with_state(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
