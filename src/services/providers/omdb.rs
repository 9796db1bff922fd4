//! OMDb API provider
//!
//! Uses the search endpoint (`?s=<title>&type=<movie|series>`), which returns a
//! list of fuzzy matches. One request per call, no caching and no retry.

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{MediaKind, OmdbSearchResponse},
    services::providers::TitleSearchProvider,
};
use reqwest::Client as HttpClient;

/// Longest slice of an error body kept in a message
const ERROR_BODY_LIMIT: usize = 200;

/// Drops the request URL from transport errors; it carries the API key
fn http_error(e: reqwest::Error) -> AppError {
    AppError::HttpClient(e.without_url())
}

/// First line of an error body, cut to [`ERROR_BODY_LIMIT`] characters
fn body_excerpt(body: &str) -> String {
    let line = body.trim().lines().next().unwrap_or_default().trim();
    let mut excerpt: String = line.chars().take(ERROR_BODY_LIMIT).collect();
    if excerpt.len() < line.len() || body.trim().lines().nth(1).is_some() {
        excerpt.push_str("...");
    }
    excerpt
}

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.omdb_api_key.clone(), config.omdb_api_url.clone())
    }
}

#[async_trait::async_trait]
impl TitleSearchProvider for OmdbProvider {
    async fn search(&self, title: &str, kind: MediaKind) -> AppResult<OmdbSearchResponse> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", title),
                ("type", kind.omdb_type()),
            ])
            .send()
            .await
            .map_err(http_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status,
                body_excerpt(&body)
            )));
        }

        let response_text = response.text().await.map_err(http_error)?;
        tracing::debug!(response = %response_text, "Raw OMDb API response");

        let search: OmdbSearchResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize OMDb response"
            );
            AppError::ExternalApi(format!("Failed to parse OMDb response: {}", e))
        })?;

        tracing::info!(
            title = %title,
            kind = %kind,
            results = search.search.len(),
            provider = "omdb",
            "Title search completed"
        );

        Ok(search)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
