//! Sequential composition of the pipeline stages.

use anyhow::{bail, Context, Result};
use tracing::{error, info, warn};

use crate::config::FeedConfig;
use crate::extractor::extract_listings;
use crate::feed::build_feed;
use crate::fetcher::Fetcher;
use crate::writer::write_feed;

/// Run one feed-generation pass and return the number of listings in the
/// written feed.
///
/// A fetch failure degrades to an empty listing set; an empty set is a
/// batch-level failure that produces no output file and no partial feed.
/// Write failures propagate as fatal.
pub async fn run(config: &FeedConfig) -> Result<usize> {
    let fetcher = Fetcher::new(config.timeout)?;

    let listings = match fetcher.fetch_page(&config.listings_url).await {
        Ok(html) => {
            let listings = extract_listings(&html, config);
            info!(count = listings.len(), "Found listings");
            listings
        }
        Err(e) => {
            error!(error = %e, "Failed to fetch listings page");
            Vec::new()
        }
    };

    if listings.is_empty() {
        warn!("No listings found, leaving feed unwritten");
        bail!("no listings extracted from {}", config.listings_url);
    }

    let channel = build_feed(&listings, config);
    write_feed(&channel, &config.output_path)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    info!(
        path = %config.output_path.display(),
        count = listings.len(),
        "RSS feed generated"
    );

    Ok(listings.len())
}
