// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{routing::get, Router};
use tokio::sync::{oneshot, watch};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::map_view::MapView;
use crate::application::street_data_loader::StreetDataLoader;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::http_street_source::HttpStreetSource;
use crate::infrastructure::scene_canvas::SceneCanvas;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, map_view};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_app_config()?;

    // Street source and canvas (infrastructure layer)
    let source = Arc::new(HttpStreetSource::new(
        config.streets.endpoint.clone(),
        config.streets.timeout(),
    )?);
    let canvas = SceneCanvas::new(config.map.icons.clone());
    let scene = canvas.handle();

    // Mount the view (application layer)
    let loader = StreetDataLoader::new(source);
    let mut view = MapView::new(loader, canvas, config.map.settings());
    let (presentation_tx, presentation) = watch::channel(view.mount());

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let view_task = tokio::spawn(async move {
        tokio::select! {
            settled = view.settle() => {
                tracing::info!("Map view settled: {}", settled);
                presentation_tx.send_replace(settled);
            }
            _ = shutdown_rx => {
                tracing::info!("Shutting down before street data arrived");
            }
        }
        view.unmount();
    });

    let state = Arc::new(AppState { presentation, scene });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/map", get(map_view))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.bind_addr.parse()?;
    tracing::info!("Starting street-map service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    let _ = shutdown_tx.send(());
    view_task.await?;

    Ok(())
}
