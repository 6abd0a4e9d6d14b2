use std::net::SocketAddr;
use motorpool_api::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "motorpool_api=debug,motorpool_core=debug,motorpool_store=info,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = motorpool_store::app_config::Config::load()?;
    tracing::info!("Starting Motorpool API on port {}", config.server.port);

    let pending_repo = motorpool_store::build_repository(&config.upstream)?;

    let app_state = AppState {
        pending_repo,
        business_rules: config.business_rules.clone(),
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
