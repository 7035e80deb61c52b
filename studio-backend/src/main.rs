// studio-backend/src/main.rs

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use studio_backend::api::{create_app, AppState};
use studio_backend::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studio_backend=info,tower_http=info".into()),
        )
        .with(fmt::layer())
        .init();

    tracing::info!("Starting Soft Academy studio backend...");

    let config = AppConfig::from_env()?;
    tracing::info!(
        environment = %config.environment,
        default_language = %config.default_language,
        relay_development_mode = config.relay.development_mode,
        "Configuration loaded"
    );

    let state = AppState::new(config.clone())?;
    let app = create_app(state);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Server listening on {}:{}", config.host, config.port);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
