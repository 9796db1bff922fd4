use std::{fs, io::ErrorKind, path::Path};

use crate::{
    error::{AppError, AppResult},
    models::MediaList,
};

/// Reads the media list TOML file
///
/// A missing, unreadable or malformed file is fatal; missing sections are not.
pub fn load_media_list(path: &Path) -> AppResult<MediaList> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::MediaListNotFound {
            path: path.to_path_buf(),
        },
        _ => AppError::MediaListUnreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let media = parse_media_list(&contents, path)?;

    tracing::info!(
        path = %path.display(),
        movies = media.movies.titles.len(),
        tv_shows = media.tv_shows.titles.len(),
        "Loaded media list"
    );

    Ok(media)
}

/// Parses media list contents; `path` is only used for error reporting
pub fn parse_media_list(contents: &str, path: &Path) -> AppResult<MediaList> {
    toml::from_str(contents).map_err(|source| AppError::MediaListParse {
        path: path.to_path_buf(),
        source,
    })
}
