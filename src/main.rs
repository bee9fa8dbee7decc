mod models;
mod handlers;
mod client;
mod config;
mod relay;
mod logger;
mod metrics;

use std::sync::Arc;

use axum::routing::{get, post, Router};
use reqwest::Client;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use config::Config;
use metrics::Metrics;

/// Ports probed in order after the preferred one, matching the deploy targets
/// this service has been run on.
const FALLBACK_PORTS: [u16; 4] = [5050, 8080, 8000, 3000];

// share the configuration, metrics and http client with all the handlers
// http client is shared to avoid creating a new
// HTTP client for every request.
#[derive(Clone)]
pub struct AppState {
    pub http_client: Client,
    pub config: Arc<Config>,
    pub metrics: Arc<Metrics>,
}

#[tokio::main]
async fn main() {

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wisdom_chat_server=info,tower_http=warn"))
        )
        .init();

    let state = AppState {
        http_client: Client::new(),
        config: Arc::new(Config::from_env()),
        metrics: Arc::new(Metrics::new()),
    };

    let static_dir = std::env::var("STATIC_DIR")
        .unwrap_or_else(|_| "frontend".to_string());

    let app = router(state, &static_dir);

    let host = std::env::var("HOST")
        .unwrap_or_else(|_| "0.0.0.0".to_string());

    let listener = match bind_listener(&host).await {
        Some(listener) => listener,
        None => {
            error!("all candidate ports are taken, cannot start the server");
            std::process::exit(1);
        }
    };

    info!("listening on {}", listener.local_addr()
        .expect("Failed to get local address"));
    axum::serve(listener, app).await
        .expect("Server failed");

}

pub fn router(state: AppState, static_dir: &str) -> Router {

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/chat", post(handlers::chat_handler))
        // everything else is the static front-end, index.html at /
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)

}

/// Bind the preferred port (`PORT`, default 5000), walking the fallback list
/// when it is already taken.
async fn bind_listener(host: &str) -> Option<TcpListener> {

    let default_port = std::env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(5000);

    for port in std::iter::once(default_port).chain(FALLBACK_PORTS) {
        match TcpListener::bind((host, port)).await {
            Ok(listener) => return Some(listener),
            Err(e) => warn!("port {} is unavailable ({}), trying the next one", port, e),
        }
    }

    None

}
