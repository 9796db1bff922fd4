use std::fmt::Display;

/// Outcome of looking up one title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// IMDb ID of the first search hit
    Identifier(String),
    /// The API answered but had no usable match
    NotFound(String),
    /// The request itself failed
    LookupError(String),
}

/// Renders the value of the `id` column. The prefixes are what reviewers search for.
impl Display for ResolutionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionResult::Identifier(id) => write!(f, "{}", id),
            ResolutionResult::NotFound(reason) => write!(f, "Not Found: {}", reason),
            ResolutionResult::LookupError(message) => write!(f, "API Error: {}", message),
        }
    }
}
