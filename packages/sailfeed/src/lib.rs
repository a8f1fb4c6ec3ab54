//! Sailboat listings feed generator.
//!
//! Fetches the sailboatlistings.com index page, extracts the recurring
//! listing blocks, and writes a pretty-printed RSS 2.0 feed carrying an
//! Atom self-link. The whole run is a single linear pass with no state
//! kept between invocations; faults in one listing are skipped while
//! batch-level faults abort the run before anything is written.
//!
//! - [`config`] - run configuration with compiled-in site constants
//! - [`fetcher`] - the single bounded-timeout HTTP GET
//! - [`extractor`] - listing-block detection and field extraction
//! - [`feed`] - RSS document construction
//! - [`writer`] - pretty-printed XML output
//! - [`pipeline`] - sequential composition of the stages

pub mod config;
pub mod error;
pub mod extractor;
pub mod feed;
pub mod fetcher;
pub mod listing;
pub mod pipeline;
pub mod writer;

pub use config::FeedConfig;
pub use error::{FetchError, WriteError};
pub use extractor::extract_listings;
pub use feed::build_feed;
pub use fetcher::Fetcher;
pub use listing::Listing;
pub use writer::write_feed;
