use thiserror::Error;

/// Failures while producing the vocabulary dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("dataset request failed with HTTP {0}")]
    HttpStatus(u16),

    #[error("dataset is empty")]
    Empty,

    /// An entry lacks one of the four required fields.
    #[error("entry {index} is missing field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("no dataset source configured")]
    NoSource,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("Quiz needs at least {required} entries (have {found})")]
    NotEnoughEntries { required: usize, found: usize },
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level error returned by the binary.
#[derive(Debug, Error)]
pub enum VocabError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    Speech(#[from] SpeechError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T, E = VocabError> = std::result::Result<T, E>;
