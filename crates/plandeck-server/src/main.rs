use plandeck_core::PlandeckConfig;
use plandeck_server::{routes, state::AppState};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cfg = PlandeckConfig::load()?;
    let state = Arc::new(AppState::init(&cfg)?);

    let app = routes::router(state).layer(TraceLayer::new_for_http());

    let addr = cfg.server.bind.clone();
    tracing::info!("plandeck-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
