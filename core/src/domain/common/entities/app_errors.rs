use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    #[error("No images uploaded")]
    EmptyUpload,

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Image storage error: {0}")]
    StorageError(String),

    #[error("Recipe corpus error: {0}")]
    CorpusError(String),

    #[error("Classifier error: {0}")]
    ClassifierError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}
