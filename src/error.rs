use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Incomplete API response: {0}")]
    Incomplete(String),
    #[error("Config error: {0}")]
    Config(String),
}

impl StatsError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        StatsError::Api {
            status,
            message: message.into(),
        }
    }
}
