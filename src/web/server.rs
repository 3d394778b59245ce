use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::passes::PassClient;

use super::config::Config;
use super::ui::handlers as ui_handlers;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Arc<PassClient>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        // Single page, served for any path and method
        .fallback(ui_handlers::satellite_passes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let client = PassClient::new(config.data_source());

    log::info!("Reading visual passes from {}", client.source().describe());

    let state = AppState {
        config: Arc::new(config),
        client: Arc::new(client),
    };

    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
