//! Errores del núcleo del pipeline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreError {
    #[error("variable '{0}' is not set")] VariableMissing(String),
    #[error("variable '{name}' could not be decoded: {detail}")] VariableDecode { name: String, detail: String },
    #[error("collection not found: {0}")] CollectionNotFound(String),
    #[error("resource not found: {0}")] ResourceNotFound(String),
    #[error("repository error: {0}")] Repository(String),
    #[error("{0}")] Task(String),
}
