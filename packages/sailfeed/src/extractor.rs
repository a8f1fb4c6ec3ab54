//! Listing extraction from the index page markup.
//!
//! Detection is a structural fingerprint of the site's current template:
//! every listing sits in a `<table width="728">`. Specification labels
//! and values are paired by document position, and labels are matched by
//! substring against a fixed keyword chain. Both heuristics are coupled
//! to the source template on purpose; when the template changes this
//! module finds zero blocks instead of erroring.

use lazy_static::lazy_static;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::config::FeedConfig;
use crate::listing::Listing;

lazy_static! {
    // One <table width="728"> per listing
    static ref TABLE_SELECTOR: Selector = Selector::parse(r#"table[width="728"]"#).unwrap();

    // Title and link live in the header span
    static ref HEADER_SELECTOR: Selector = Selector::parse("span.sailheader").unwrap();
    static ref ANCHOR_SELECTOR: Selector = Selector::parse("a").unwrap();

    // Specification labels (sailvb) and values (sailvk)
    static ref LABEL_SELECTOR: Selector = Selector::parse("span.sailvb").unwrap();
    static ref VALUE_SELECTOR: Selector = Selector::parse("span.sailvk").unwrap();

    // Free-text block holding the "Added 15-Mar-2024" line
    static ref DETAILS_SELECTOR: Selector = Selector::parse("span.details").unwrap();

    static ref IMAGE_SELECTOR: Selector = Selector::parse("img").unwrap();

    static ref DATE_ADDED_REGEX: Regex =
        Regex::new(r"Added\s+(\d{1,2}-\w{3}-\d{4})").unwrap();
}

/// Extract listings from the index page markup, in document order,
/// stopping once `config.max_listings` have been retained.
///
/// Malformed blocks are skipped without aborting the pass; candidate
/// blocks past the cap are never parsed.
pub fn extract_listings(html: &str, config: &FeedConfig) -> Vec<Listing> {
    let document = Html::parse_document(html);
    let mut listings = Vec::new();

    for table in document.select(&TABLE_SELECTOR) {
        if listings.len() >= config.max_listings {
            break;
        }
        if let Some(listing) = parse_listing(table, config) {
            listings.push(listing);
        }
    }

    listings
}

/// Parse one candidate listing block.
///
/// Returns `None` when the block lacks the required title/link pair;
/// every optional field degrades to `None` on its own.
fn parse_listing(table: ElementRef<'_>, config: &FeedConfig) -> Option<Listing> {
    let header = table.select(&HEADER_SELECTOR).next()?;
    let anchor = header.select(&ANCHOR_SELECTOR).next()?;

    let title = stripped_text(anchor);
    if title.is_empty() {
        return None;
    }
    let href = match anchor.value().attr("href") {
        Some(href) => href,
        None => {
            warn!("Skipping listing block: header anchor has no href");
            return None;
        }
    };

    let mut listing = Listing::new(title, absolutize(href, config));

    // Labels and values are parallel sequences; zip truncates to the
    // shorter side when the markup is uneven.
    let labels: Vec<ElementRef<'_>> = table.select(&LABEL_SELECTOR).collect();
    let values: Vec<ElementRef<'_>> = table.select(&VALUE_SELECTOR).collect();

    for (label, value) in labels.iter().zip(values.iter()) {
        let label_text = stripped_text(*label).replace(':', "");
        let label_text = label_text.trim();
        let value_text = stripped_text(*value);

        if label_text.contains("Length") {
            listing.length = Some(value_text);
        } else if label_text.contains("Year") {
            listing.year = Some(value_text);
        } else if label_text.contains("Type") {
            listing.boat_type = Some(value_text);
        } else if label_text.contains("Hull") {
            listing.hull = Some(value_text);
        } else if label_text.contains("Asking") {
            listing.price = Some(value_text);
        } else if label_text.contains("Location") {
            listing.location = Some(value_text);
        } else if label_text.contains("Beam") {
            listing.beam = Some(value_text);
        } else if label_text.contains("Draft") {
            listing.draft = Some(value_text);
        }
    }

    if let Some(details) = table.select(&DETAILS_SELECTOR).next() {
        let text: String = details.text().collect();
        if let Some(captures) = DATE_ADDED_REGEX.captures(&text) {
            listing.date_added = Some(captures[1].to_string());
        }
    }

    // The photo is the first image carrying a non-empty alt; spacer and
    // chrome images on this site have none.
    let photo = table
        .select(&IMAGE_SELECTOR)
        .find(|img| img.value().attr("alt").map_or(false, |alt| !alt.is_empty()));
    if let Some(img) = photo {
        if let Some(src) = img.value().attr("src") {
            listing.image = Some(absolutize(src, config));
        }
    }

    debug!(title = %listing.title, "Parsed listing");
    Some(listing)
}

/// Text content of an element with each segment trimmed, concatenated.
fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Prefix the site origin onto anything not already scheme-prefixed.
/// Plain concatenation; the site only emits root-relative paths.
fn absolutize(path: &str, config: &FeedConfig) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", config.site_origin, path)
    }
}
