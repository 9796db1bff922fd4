use std::path::PathBuf;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("OMDb API key not found")]
    MissingApiKey,

    #[error("{0}")]
    Config(String),

    #[error("The file '{}' was not found", path.display())]
    MediaListNotFound { path: PathBuf },

    #[error("Error parsing TOML file '{}': {source}", path.display())]
    MediaListParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not read '{}': {source}", path.display())]
    MediaListUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),
}

impl AppError {
    /// Remediation line shown to the user alongside a fatal error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::MissingApiKey => {
                Some("Please ensure it's set in your .env file as OMDB_API_KEY.")
            }
            AppError::Config(_) => Some("Check the environment variables in your .env file."),
            AppError::MediaListNotFound { .. } => Some(
                "Please make sure the media list file is in the same directory as the program.",
            ),
            AppError::MediaListParse { .. } => Some("Please check the syntax of your TOML file."),
            AppError::MediaListUnreadable { .. } => Some(
                "Please make sure the media list file is readable and saved as UTF-8 text.",
            ),
            AppError::Io(_) | AppError::Csv(_) => {
                Some("Check that the output location is writable.")
            }
            AppError::HttpClient(_) | AppError::ExternalApi(_) => None,
        }
    }

    /// Display text followed by every distinct message in the source chain
    pub fn describe(&self) -> String {
        let mut description = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(err) = source {
            let message = err.to_string();
            if !description.contains(&message) {
                description.push_str(": ");
                description.push_str(&message);
            }
            source = err.source();
        }
        description
    }
}

pub type AppResult<T> = Result<T, AppError>;
