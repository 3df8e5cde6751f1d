use anyhow::Result;
use axum::extract::State;
use axum::http::{Method, StatusCode, header};
use axum::routing::get;
use axum::{Json, Router};
use log::{info, warn};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::config::AppConfig;
use crate::domain::RankingsSnapshot;
use crate::snapshot::SnapshotStore;

pub struct AppState {
    pub store: SnapshotStore,
}

/// Static file server for the rankings page, plus the snapshot as JSON
pub struct ServerService {
    ports: Vec<u16>,
    content_root: PathBuf,
    snapshot_path: PathBuf,
}

impl ServerService {
    /// `port` pins the server to one port; otherwise the preferred list is tried in order
    pub fn new(port: Option<u16>, config: AppConfig) -> Self {
        let ports = match port {
            Some(port) => vec![port],
            None => config.server.preferred_ports,
        };
        Self {
            ports,
            content_root: config.server.content_root,
            snapshot_path: config.snapshot.path,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let state = Arc::new(AppState {
            store: SnapshotStore::new(&self.snapshot_path),
        });
        let app = create_router(state, &self.content_root);

        let listener = bind_first(IpAddr::V4(Ipv4Addr::UNSPECIFIED), &self.ports).await?;
        let port = listener.local_addr()?.port();
        info!("Serving {} at http://localhost:{}/", self.content_root.display(), port);
        println!("Server running at http://localhost:{port}/");
        println!("Open http://localhost:{port}/index.html in your browser");
        println!("Press Ctrl+C to stop the server");

        axum::serve(listener, app).await?;
        Ok(())
    }
}

pub fn create_router(state: Arc<AppState>, content_root: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/rankings", get(get_rankings))
        .fallback_service(ServeDir::new(content_root))
        .with_state(state)
        .layer(cors)
}

async fn get_rankings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<RankingsSnapshot>, (StatusCode, String)> {
    // File reads stay off the async workers
    let loaded = tokio::task::spawn_blocking(move || state.store.load_opt()).await;

    match loaded {
        Ok(Ok(Some(snapshot))) => Ok(Json(snapshot)),
        Ok(Ok(None)) => Err((StatusCode::NOT_FOUND, "No rankings snapshot yet".to_string())),
        Ok(Err(e)) => Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string())),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, format!("Snapshot read failed: {}", e))),
    }
}

/// Bind the first free port of `ports`, in order
pub async fn bind_first(ip: IpAddr, ports: &[u16]) -> Result<TcpListener> {
    for port in ports {
        let addr = SocketAddr::new(ip, *port);
        match TcpListener::bind(addr).await {
            Ok(listener) => return Ok(listener),
            Err(e) => warn!("Port {} is in use ({}), trying next port...", port, e),
        }
    }
    anyhow::bail!("All ports are in use: {:?}", ports)
}
