// Main entry point for the feed generator

use anyhow::Result;
use sailfeed::{pipeline, FeedConfig};
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; the feed file is the only product.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    info!("Starting sailboat listings scrape");

    let config = FeedConfig::from_env()?;
    if config.self_url_is_placeholder() {
        warn!("FEED_SELF_URL is not set; the feed self-link keeps the placeholder host");
    }

    pipeline::run(&config).await?;

    Ok(())
}
