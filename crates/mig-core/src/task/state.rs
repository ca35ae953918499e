/// Estado de una tarea de migración en tiempo de ejecución.
///
/// Las transiciones válidas son:
/// - `Running` -> `Succeeded`
/// - `Running` -> `Failed`
///
/// El estado es un tipo cerrado; sólo se convierte a las etiquetas de texto
/// del contrato (`migrationState`) en la frontera con el motor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskState {
    /// La tarea está en ejecución.
    Running,
    /// La tarea terminó correctamente.
    Succeeded,
    /// La tarea falló; conserva la causa legible.
    Failed(String),
}

impl TaskState {
    /// Etiqueta de texto que corresponde a este estado para una tarea dada.
    pub fn as_label<'a>(&self, labels: &'a TaskLabels) -> &'a str {
        match self {
            TaskState::Running => labels.running,
            TaskState::Succeeded => labels.succeeded,
            TaskState::Failed(_) => labels.failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskState::Running)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TaskState::Failed(_))
    }
}

/// Etiquetas de estado de una tarea concreta. Se escriben textuales en la
/// variable `migrationState`; el fallo escribe además `<failed>_REASON`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskLabels {
    pub running: &'static str,
    pub succeeded: &'static str,
    pub failed: &'static str,
}

impl TaskLabels {
    pub const fn new(running: &'static str, succeeded: &'static str, failed: &'static str) -> Self {
        Self { running, succeeded, failed }
    }

    /// Nombre de la variable de causa de fallo.
    pub fn reason_variable(&self) -> String {
        format!("{}_REASON", self.failed)
    }

    /// Texto de estado legible al arrancar (guiones bajos a espacios).
    pub fn status_text(&self) -> String {
        self.running.replace('_', " ")
    }

    pub fn success_status_text(&self) -> String {
        self.succeeded.replace('_', " ")
    }

    pub fn failure_status_text(&self) -> String {
        self.failed.replace('_', " ")
    }
}
