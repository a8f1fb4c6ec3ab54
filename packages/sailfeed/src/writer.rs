//! Feed serialization and file output.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use rss::Channel;
use tracing::debug;

use crate::error::WriteError;

/// Declaration emitted ahead of the channel element; the serializer
/// itself does not write one.
const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Render the feed with two-space indentation and overwrite `path`.
///
/// The file is replaced in place, no atomic rename. Failures here are
/// fatal to the run.
pub fn write_feed(channel: &Channel, path: &Path) -> Result<(), WriteError> {
    let mut file = File::create(path)?;
    writeln!(file, "{}", XML_DECLARATION)?;

    let mut file = channel.pretty_write_to(file, b' ', 2)?;
    writeln!(file)?;

    debug!(path = %path.display(), "Feed written");
    Ok(())
}
