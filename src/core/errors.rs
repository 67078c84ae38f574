use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChistometroError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Corpus unavailable: {0}")]
    DataUnavailable(String),

    #[error("Corpus is missing required column '{0}'")]
    MissingColumn(String),

    #[error("Malformed corpus row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    #[error("ChistometroError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for ChistometroError {
    fn from(error: std::io::Error) -> Self {
        ChistometroError::Io(Box::new(error))
    }
}
