//! RSS 2.0 document construction.

use chrono::{NaiveDate, Utc};
use rss::extension::atom::{AtomExtension, AtomExtensionBuilder, Link};
use rss::{Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder};
use tracing::warn;

use crate::config::FeedConfig;
use crate::listing::Listing;

/// RFC 822 form used by RSS date elements.
const RFC822_GMT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Day-month-year form the site prints in its "Added" line.
const DATE_ADDED_FORMAT: &str = "%d-%b-%Y";

/// Build the feed document for one run.
///
/// Item order equals listing order; nothing is re-sorted or
/// de-duplicated. `lastBuildDate` is the moment of generation.
pub fn build_feed(listings: &[Listing], config: &FeedConfig) -> Channel {
    let items: Vec<Item> = listings.iter().map(build_item).collect();

    ChannelBuilder::default()
        .title(config.feed_title.clone())
        .link(config.feed_link.clone())
        .description(config.feed_description.clone())
        .language(Some(config.language.clone()))
        .last_build_date(Some(Utc::now().format(RFC822_GMT).to_string()))
        .atom_ext(Some(self_link(&config.self_url)))
        .items(items)
        .build()
}

/// Atom extension carrying the feed's own URL, rel="self".
fn self_link(self_url: &str) -> AtomExtension {
    let link = Link {
        href: self_url.to_string(),
        rel: "self".to_string(),
        mime_type: Some("application/rss+xml".to_string()),
        ..Link::default()
    };

    AtomExtensionBuilder::default().links(vec![link]).build()
}

fn build_item(listing: &Listing) -> Item {
    let guid = GuidBuilder::default()
        .value(listing.link.clone())
        .permalink(true)
        .build();

    ItemBuilder::default()
        .title(Some(item_title(listing)))
        .link(Some(listing.link.clone()))
        .guid(Some(guid))
        .description(Some(build_description(listing)))
        .pub_date(pub_date(listing))
        .build()
}

/// Item title: the listing title plus " (year)" when a year was scraped.
fn item_title(listing: &Listing) -> String {
    match &listing.year {
        Some(year) => format!("{} ({})", listing.title, year),
        None => listing.title.clone(),
    }
}

/// Description HTML: an optional 200px photo part, then a
/// `<b>Label:</b> value` line per present field, `<br/>`-joined.
///
/// The specification part is appended even when empty, so a photo-only
/// listing keeps a trailing `<br/><br/>`.
fn build_description(listing: &Listing) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(image) = &listing.image {
        parts.push(format!(
            r#"<img src="{}" alt="{}" width="200"/><br/>"#,
            image, listing.title
        ));
    }

    let fields = [
        ("Price", &listing.price),
        ("Length", &listing.length),
        ("Year", &listing.year),
        ("Type", &listing.boat_type),
        ("Hull", &listing.hull),
        ("Location", &listing.location),
        ("Beam", &listing.beam),
        ("Draft", &listing.draft),
    ];

    let mut specs: Vec<String> = Vec::new();
    for (label, value) in fields {
        if let Some(value) = value {
            specs.push(format!("<b>{}:</b> {}", label, value));
        }
    }
    parts.push(specs.join("<br/>"));

    parts.join("<br/><br/>")
}

/// RFC 822 pubDate at midnight UTC, only when the scraped date parses.
fn pub_date(listing: &Listing) -> Option<String> {
    let raw = listing.date_added.as_deref()?;
    match NaiveDate::parse_from_str(raw, DATE_ADDED_FORMAT) {
        Ok(date) => Some(date.format("%a, %d %b %Y 00:00:00 GMT").to_string()),
        Err(e) => {
            warn!(date = raw, error = %e, "Ignoring unparseable listing date");
            None
        }
    }
}
