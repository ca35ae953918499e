//! mig-adapters: tareas concretas del pipeline y sus colaboradores
pub mod diff;
pub mod intake;
pub mod populate;
pub mod service;

pub use diff::{compute_tree_diff, diff_resource_path, persist_diff, DiffEntry, DiffStatus, DiffViewData,
               DIFF_COLLECTION, DIFF_RESOURCE_PREFIX};
pub use intake::{ArchiveIntakeTask, INTAKE_LABELS};
pub use populate::{ProjectPopulationTask, POPULATE_LABELS, TMP_SUFFIX, UNMODIFIED_SUFFIX};
pub use service::{MigrationService, WorkspaceMigrationService};

use std::fmt;

use mig_core::CoreError;

/// Convierte un error de colaborador en el error opaco de tarea.
pub(crate) fn task_error(e: impl fmt::Display) -> CoreError {
    CoreError::Task(e.to_string())
}
