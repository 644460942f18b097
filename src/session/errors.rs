use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum SessionError {
    #[error("An upload is already in progress")]
    UploadInProgress
}
