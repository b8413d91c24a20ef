//! Earthquake feed documents and display rows.

use serde::{Deserialize, Serialize};

/// One GeoJSON summary document as returned by the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedResponse {
    pub metadata: FeedMetadata,
    pub features: Vec<Feature>,
}

impl FeedResponse {
    /// Feed title, e.g. "USGS Magnitude 4.5+ Earthquakes, Past Hour".
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    /// Earthquake records in feed order.
    pub fn records(&self) -> impl Iterator<Item = &QuakeProperties> {
        self.features.iter().map(|f| &f.properties)
    }
}

/// Document-level metadata. Only the title is read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeedMetadata {
    pub title: String,
}

/// A GeoJSON feature wrapping one earthquake.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    pub properties: QuakeProperties,
}

/// Raw earthquake record fields.
///
/// Every field except `alert` is required; a missing or mistyped value fails
/// the whole document rather than being defaulted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuakeProperties {
    /// Origin time, milliseconds since the Unix epoch
    pub time: i64,

    /// Magnitude
    pub mag: f64,

    /// Place description
    pub place: String,

    /// PAGER alert level ("green", "yellow", "orange", "red") or null
    #[serde(default)]
    pub alert: Option<String>,

    /// Event detail page
    pub url: String,
}

/// Display text with an optional 256-color foreground index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Styled {
    pub text: String,
    pub color: Option<u8>,
}

impl Styled {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: u8) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// One table line: time, magnitude, place, PAGER alert, detail URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub time: String,
    pub mag: Styled,
    pub place: String,
    pub alert: Styled,
    pub url: String,
}
