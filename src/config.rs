use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key (required)
    #[serde(default)]
    pub omdb_api_key: String,

    /// OMDb search endpoint
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// TOML file holding the titles to export
    #[serde(default = "default_media_list_file")]
    pub media_list_file: String,

    /// CSV file the watchlist rows are written to
    #[serde(default = "default_output_csv_file")]
    pub output_csv_file: String,
}

fn default_omdb_api_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_media_list_file() -> String {
    "sampleMedia.toml".to_string()
}

fn default_output_csv_file() -> String {
    "trakt_import_list.csv".to_string()
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit list of variables
    pub fn from_vars<I>(vars: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.omdb_api_key.trim().is_empty() {
            return Err(AppError::MissingApiKey);
        }
        Ok(())
    }
}
