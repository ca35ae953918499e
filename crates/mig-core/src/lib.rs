//! mig-core: pipeline secuencial de tareas de migración
pub mod catalog;
pub mod context;
pub mod engine;
pub mod errors;
pub mod repo;
pub mod task;
pub mod track;


pub use catalog::catalog_resources;
pub use context::{ExecutionContext, InMemoryProcessVariables, ProcessVariables, DIFF_VIEW_DATA_FILE_NAME,
                  MIGRATION_STATE, USER_DATA};
pub use engine::MigrationEngine;
pub use errors::CoreError;
pub use repo::{collection_name, join_path, FsRepository, InMemoryRepository, Repository};
pub use task::{run_task, MigrationTask, TaskLabels, TaskState};
pub use track::{LogTracker, StatusTracker};
