use calorie_miniapp::{
    AppState,
    config::{resolve_base_url, resolve_port},
    router,
};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let base_url = resolve_base_url();
    info!("calorie backend at {base_url}");
    let app = router(AppState::new(base_url));

    let addr = SocketAddr::from(([0, 0, 0, 0], resolve_port()));
    info!("preview listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
