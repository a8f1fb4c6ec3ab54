//! The per-listing record extracted from one listing block.

/// One sailboat listing scraped from the index page.
///
/// A listing is retained only when both `title` and `link` were found.
/// Every other field is independently optional and is simply omitted
/// from the feed item when absent. Values are kept verbatim from the
/// source markup, no unit parsing or numeric coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    // Required
    pub title: String,
    pub link: String,

    // Photo, absolute URL
    pub image: Option<String>,

    // Specifications, free text
    pub year: Option<String>,
    pub length: Option<String>,
    pub boat_type: Option<String>,
    pub hull: Option<String>,
    pub price: Option<String>,
    pub location: Option<String>,
    pub beam: Option<String>,
    pub draft: Option<String>,

    // Day-month-year text, e.g. "15-Mar-2024"
    pub date_added: Option<String>,
}

impl Listing {
    /// Create a listing with the two required fields.
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            ..Default::default()
        }
    }
}
