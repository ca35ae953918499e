use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("store error: {0}")]
    Store(String),
}
