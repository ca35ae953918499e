//! Sobre de ejecución de tareas.
//!
//! Implementa el contrato de máquina de estados común a todas las tareas
//! como función de orden superior en lugar de una clase base: recibe la
//! tarea y aplica uniformemente las transiciones y la captura de fallos.

use log::warn;

use crate::context::{ExecutionContext, MIGRATION_STATE};
use crate::task::definition::MigrationTask;
use crate::task::state::TaskState;
use crate::track::StatusTracker;

/// Ejecuta una tarea dentro del contrato de estados.
///
/// Antes del trabajo: `migrationState` = etiqueta running y aviso al
/// tracker. En éxito: etiqueta de éxito. En fallo: etiqueta de fallo más la
/// variable `<failed>_REASON` con la causa, aviso al tracker, y retorno
/// normal; el error nunca se propaga al motor como excepción.
pub fn run_task(task: &mut dyn MigrationTask,
                ctx: &ExecutionContext,
                tracker: &mut dyn StatusTracker)
                -> TaskState {
    let labels = task.labels().clone();
    ctx.set_var(MIGRATION_STATE, labels.running);
    tracker.update_status(&labels.status_text());

    match task.work(ctx) {
        Ok(()) => {
            ctx.set_var(MIGRATION_STATE, labels.succeeded);
            tracker.update_status(&labels.success_status_text());
            TaskState::Succeeded
        }
        Err(e) => {
            let reason = e.to_string();
            warn!("task {} failed: {}", task.id(), reason);
            ctx.set_var(MIGRATION_STATE, labels.failed);
            ctx.set_var(&labels.reason_variable(), &reason);
            tracker.update_status(&labels.failure_status_text());
            TaskState::Failed(reason)
        }
    }
}
