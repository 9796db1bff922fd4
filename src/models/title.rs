use serde::Deserialize;
use std::fmt::Display;

/// Kind of media a title refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Movie,
    Show,
}

impl MediaKind {
    /// Value written to the `media_type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show => "show",
        }
    }

    /// OMDb's `type` parameter for this kind
    pub fn omdb_type(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show => "series",
        }
    }
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single title to look up, tagged with the list it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleEntry {
    pub title: String,
    pub kind: MediaKind,
}

impl TitleEntry {
    pub fn new(title: impl Into<String>, kind: MediaKind) -> Self {
        Self {
            title: title.into(),
            kind,
        }
    }
}

/// A `[section]` of the media list file
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TitleSection {
    #[serde(default)]
    pub titles: Vec<String>,
}

/// Titles read from the media list file
///
/// Sections and keys that are absent default to empty lists; unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct MediaList {
    #[serde(default)]
    pub movies: TitleSection,
    #[serde(default)]
    pub tv_shows: TitleSection,
}

impl MediaList {
    /// Titles of the given kind, in file order
    pub fn titles(&self, kind: MediaKind) -> &[String] {
        match kind {
            MediaKind::Movie => &self.movies.titles,
            MediaKind::Show => &self.tv_shows.titles,
        }
    }

    /// Entries of the given kind, in file order
    pub fn entries(&self, kind: MediaKind) -> impl Iterator<Item = TitleEntry> + '_ {
        self.titles(kind)
            .iter()
            .map(move |title| TitleEntry::new(title.clone(), kind))
    }

    pub fn len(&self) -> usize {
        self.movies.titles.len() + self.tv_shows.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
