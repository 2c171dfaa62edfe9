use skycast_store::ForecastStore;
use skycast_web::{cors_layer, router, WebConfig, WebError};

#[tokio::main]
async fn main() -> Result<(), WebError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = WebConfig::from_env()?;
    let store = ForecastStore::new();
    let app = router(store).layer(cors_layer(&config)?);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, origin = %config.allowed_origin, "skycast listening");
    axum::serve(listener, app).await?;

    Ok(())
}
