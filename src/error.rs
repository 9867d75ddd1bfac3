use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Catalog Validation Error: {0}")]
    Validation(String),

    #[error("Session Error: {0}")]
    Session(String),
}

pub type QuizResult<T> = Result<T, QuizError>;
