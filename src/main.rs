//! Service entry point: configuration, tracing, wiring and the HTTP server.

use anyhow::Context;
use fuelspot::api::rest::{create_router, AppState};
use fuelspot::application::services::{
    AggregatorConfig, RateLimitConfig, SlidingWindowRateLimiter, StationAggregator,
    SubmissionGuard,
};
use fuelspot::config::ServiceConfig;
use fuelspot::infrastructure::persistence::InMemoryPriceRepository;
use fuelspot::infrastructure::provider::GooglePlacesProvider;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::from_env().context("loading configuration")?;

    let mut provider = GooglePlacesProvider::new(
        config.provider.api_key.clone(),
        config.provider.timeout_ms,
    )
    .context("creating provider gateway")?;
    if let Some(base_url) = &config.provider.base_url {
        provider = provider.with_base_url(base_url.clone());
    }

    let repository = Arc::new(InMemoryPriceRepository::new());
    let limiter = Arc::new(SlidingWindowRateLimiter::new(RateLimitConfig {
        max_attempts: config.rate_limit_max_attempts,
        window: Duration::from_secs(config.rate_limit_window_secs),
    }));

    // Reclaim rate-limiter entries for callers with no recent activity.
    let eviction_limiter = Arc::clone(&limiter);
    let eviction_period = Duration::from_secs(config.rate_limit_window_secs);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(eviction_period);
        loop {
            ticker.tick().await;
            eviction_limiter.evict_idle();
        }
    });

    let state = AppState {
        aggregator: Arc::new(StationAggregator::new(
            Arc::new(provider),
            Arc::clone(&repository) as _,
            AggregatorConfig::default()
                .with_freshness_window_secs(config.freshness_window_secs),
        )),
        submission_guard: Arc::new(SubmissionGuard::new(repository, limiter)),
    };

    let router = create_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, "fuelspot listening");
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("serving HTTP")?;

    Ok(())
}
