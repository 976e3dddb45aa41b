use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::context::PlannerContext;
use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: [u8; 4],
    pub port: u16,
    /// Directory served at `/` next to the API, if any
    pub static_dir: Option<PathBuf>,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: [127, 0, 0, 1],
            port: 3005,
            static_dir: None,
            enable_cors: true,
        }
    }
}

/// Builds the application router with middleware
pub fn build_app(planner: PlannerContext<u32>, config: &ServerConfig) -> Router {
    let mut app = create_router();

    if let Some(dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
            .allow_headers([header::CONTENT_TYPE]);
        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    app.with_state(AppState::new(planner))
}

/// Start the web server and serve until the process is stopped
pub async fn start_server(
    planner: PlannerContext<u32>,
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(planner, &config);

    let addr = SocketAddr::from((config.host, config.port));
    info!("Metro planner API listening on http://{}", addr);
    if let Some(dir) = &config.static_dir {
        info!("Serving static files from {}", dir.display());
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
