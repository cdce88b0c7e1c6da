use anyhow::{Context, Result};
use healthdesk::config::AppConfig;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "healthdesk=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HealthDesk");

    let config = AppConfig::load().context("failed to load configuration")?;
    if config.api_key.is_empty() {
        info!("No API key configured; AI queries will report the service error");
    }

    healthdesk::ui::run(config)
}
