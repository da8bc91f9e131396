use thiserror::Error;

/// Errors that can occur while generating code.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Invalid definition: {0}")]
    InvalidDefinition(String),

    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),

    #[error("Generation error: {0}")]
    Generic(String),
}

impl From<String> for GenerateError {
    fn from(s: String) -> Self {
        GenerateError::Generic(s)
    }
}

impl From<&str> for GenerateError {
    fn from(s: &str) -> Self {
        GenerateError::Generic(s.to_string())
    }
}
