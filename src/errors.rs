use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("http error: {0}")]
    Http(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("empty input: {0}")]
    Empty(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self { AppError::Http(format!("{}", e)) }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self { AppError::Decode(format!("{}", e)) }
}
