use ledge::config::Config;
use ledge::services::CandleService;
use ledge::sources::YahooFinanceClient;
use ledge::AppState;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ledge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());
    info!("Starting Ledge server on {}:{}", config.host, config.port);
    info!(
        "Analysing {} and serving {} of daily candles, cache TTL {}s",
        config.analysis_range, config.history_range, config.candle_cache_ttl_secs
    );

    let yahoo = YahooFinanceClient::new(Duration::from_secs(config.http_timeout_secs))?;
    let cache_ttl = Duration::from_secs(config.candle_cache_ttl_secs);
    let candle_service = CandleService::new(Arc::new(yahoo), cache_ttl);

    // Periodically drop expired series
    {
        let candle_service = candle_service.clone();
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(cache_ttl.max(Duration::from_secs(60))).await;
                candle_service.purge_expired();
            }
        });
    }

    let state = AppState {
        config: config.clone(),
        candle_service,
    };

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Ledge server listening on {}", addr);

    axum::serve(listener, ledge::app(state)).await?;

    Ok(())
}
