use crate::{
    models::{MediaKind, OmdbSearchResponse, ResolutionResult},
    services::providers::TitleSearchProvider,
};

/// Resolves one title to an IMDb ID
///
/// Never fails: provider errors become [`ResolutionResult::LookupError`] so the
/// caller can keep going with the next title.
pub async fn resolve_title(
    provider: &dyn TitleSearchProvider,
    title: &str,
    kind: MediaKind,
) -> ResolutionResult {
    match provider.search(title, kind).await {
        Ok(response) => classify_response(title, response),
        Err(e) => {
            let message = e.describe();
            tracing::warn!(
                error = %message,
                title = %title,
                provider = provider.name(),
                "Title lookup failed"
            );
            ResolutionResult::LookupError(message)
        }
    }
}

/// Maps a decoded search response to a result. Only the first hit is considered.
pub fn classify_response(title: &str, response: OmdbSearchResponse) -> ResolutionResult {
    if response.is_success() {
        if let Some(first) = response.search.into_iter().next() {
            return match first.imdb_id.filter(|id| !id.is_empty()) {
                Some(id) => ResolutionResult::Identifier(id),
                None => ResolutionResult::NotFound(format!("No IMDb ID found for {}", title)),
            };
        }
    }

    let reason = response
        .error
        .unwrap_or_else(|| format!("Unknown error for {}", title));
    ResolutionResult::NotFound(reason)
}
