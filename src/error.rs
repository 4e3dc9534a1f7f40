use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    JsonParsing(#[from] serde_json::Error),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Configuration missing: {0}")]
    ConfigurationMissing(String),

    #[error("KEY must be a valid project key or issue key: {0}")]
    MalformedKey(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Issue search failed: {0}")]
    SearchFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl Error {
    /// Process exit code for this error. Usage-class errors (bad key, bad
    /// configuration) exit 2; runtime failures exit 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MalformedKey(_)
            | Error::InvalidConfiguration(_)
            | Error::ConfigurationMissing(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
