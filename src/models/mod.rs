use serde::Deserialize;

pub mod export_row;
pub mod resolution;
pub mod title;

pub use export_row::{watchlist_timestamp, OutputRow, CSV_HEADER};
pub use resolution::ResolutionResult;
pub use title::{MediaKind, MediaList, TitleEntry, TitleSection};

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw response from the OMDb search endpoint (`?s=...`)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OmdbSearchResponse {
    /// `"True"` or `"False"`, as a string
    #[serde(rename = "Response", default)]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<OmdbSearchHit>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl OmdbSearchResponse {
    pub fn is_success(&self) -> bool {
        self.response == "True"
    }
}

/// One entry of the `Search` array
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OmdbSearchHit {
    #[serde(rename = "imdbID", default)]
    pub imdb_id: Option<String>,
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Type", default)]
    pub hit_type: Option<String>,
}
