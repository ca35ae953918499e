//! Motor secuencial del pipeline de migración.
//!
//! Sustituye al motor de procesos externo en lo que a esta capa concierne:
//! invoca las tareas en orden contra un mismo contexto, deteniéndose en el
//! primer fallo. Sin hilos ni async; una corrida es estrictamente
//! secuencial y corridas distintas se aíslan por identificador de ejecución.

use crate::context::ExecutionContext;
use crate::task::{run_task, MigrationTask, TaskState};
use crate::track::{LogTracker, StatusTracker};

pub struct MigrationEngine {
    tasks: Vec<Box<dyn MigrationTask>>,
    tracker: Box<dyn StatusTracker>,
}

impl MigrationEngine {
    /// Motor vacío con el tracker por defecto.
    pub fn new() -> Self {
        Self { tasks: Vec::new(),
               tracker: Box::new(LogTracker) }
    }

    pub fn with_tracker(tracker: Box<dyn StatusTracker>) -> Self {
        Self { tasks: Vec::new(), tracker }
    }

    /// Añade una tarea al final del pipeline (estilo builder).
    pub fn add_task(mut self, task: Box<dyn MigrationTask>) -> Self {
        self.tasks.push(task);
        self
    }

    /// Ejecuta las tareas en orden. Devuelve el estado terminal de la última
    /// tarea ejecutada; tras un fallo no se invocan las restantes, y el motor
    /// deja en el contexto las variables de estado y causa para inspección.
    pub fn run(&mut self, ctx: &ExecutionContext) -> TaskState {
        let mut last = TaskState::Succeeded;
        for task in self.tasks.iter_mut() {
            let state = run_task(task.as_mut(), ctx, self.tracker.as_mut());
            if state.is_failed() {
                return state;
            }
            last = state;
        }
        last
    }
}

impl Default for MigrationEngine {
    fn default() -> Self {
        Self::new()
    }
}
