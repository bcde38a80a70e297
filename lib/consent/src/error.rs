use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConsentError {
    #[error("consent category id must not be empty")]
    EmptyCategoryId,

    #[error("duplicate consent category id `{0}`")]
    DuplicateCategory(String),

    #[error("callback registered for unknown consent category `{0}`")]
    UnknownCategory(String),

    #[error("invalid consent settings: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("client storage is not available")]
    StorageUnavailable,

    #[error("storage error: {0}")]
    Storage(String),

    #[error("document is not available")]
    DocumentUnavailable,

    #[error("document error: {0}")]
    Document(String),

    #[error("script url must not be empty")]
    EmptyScriptUrl,
}

pub type Result<T> = std::result::Result<T, ConsentError>;
