//! mig-persistence: frontera de persistencia de metadatos de migración
pub mod config;
pub mod error;
pub mod store;

pub use config::{init_dotenv, RepoConfig, DEFAULT_REPOSITORY_ROOT};
pub use error::PersistenceError;
pub use store::{FileRecordStore, InMemoryFileRecordStore};
