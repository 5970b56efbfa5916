//! Dev/status server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use super::html::STATUS_HTML;
use super::snapshot::ShellSnapshot;

/// Snapshot shared between the event loop (writer) and the handlers.
pub type SharedSnapshot = Arc<RwLock<ShellSnapshot>>;

/// Running server.
pub struct DevServer {
    pub addr: SocketAddr,
    pub snapshot: SharedSnapshot,
    pub handle: JoinHandle<()>,
}

impl DevServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Replace the published snapshot.
    pub async fn publish(&self, snapshot: ShellSnapshot) {
        *self.snapshot.write().await = snapshot;
    }

    pub fn shutdown(self) {
        self.handle.abort();
    }
}

/// Build the router over a shared snapshot.
pub fn router(snapshot: SharedSnapshot) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(status_page))
        .route("/state", get(state_handler))
        .layer(cors)
        .with_state(snapshot)
}

/// Bind `addr` and serve in a background task.
///
/// Bind to port 0 to let the OS pick; the chosen address is in
/// [`DevServer::addr`].
pub async fn start_dev_server_on(
    addr: SocketAddr,
    initial: ShellSnapshot,
) -> color_eyre::Result<DevServer> {
    let snapshot: SharedSnapshot = Arc::new(RwLock::new(initial));
    let app = router(Arc::clone(&snapshot));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;
    tracing::info!("Dev server listening on http://{}", addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Dev server error: {}", e);
        }
    });

    Ok(DevServer {
        addr,
        snapshot,
        handle,
    })
}

async fn status_page() -> impl IntoResponse {
    Html(STATUS_HTML)
}

async fn state_handler(State(snapshot): State<SharedSnapshot>) -> impl IntoResponse {
    let snapshot = snapshot.read().await;
    Json(snapshot.clone())
}
