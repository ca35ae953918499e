use crate::context::ExecutionContext;
use crate::errors::CoreError;
use crate::task::state::TaskLabels;

/// Una tarea del pipeline de migración: una unidad de trabajo acotada que el
/// motor invoca una vez por corrida.
///
/// El cuerpo (`work`) debe leer su estado previo fresco desde el contexto en
/// cada invocación y nunca asumir que es la primera tarea de la corrida. La
/// captura de fallos y las transiciones de estado son responsabilidad del
/// sobre (`envelope::run_task`), no del cuerpo.
pub trait MigrationTask {
    /// Identificador estable de la tarea.
    fn id(&self) -> &str;

    /// Etiquetas running/éxito/fallo escritas en `migrationState`.
    fn labels(&self) -> &TaskLabels;

    /// Cuerpo de la tarea. Cualquier error se convierte en estado terminal de
    /// fallo; no debe dejar el contexto a medio escribir.
    fn work(&mut self, ctx: &ExecutionContext) -> Result<(), CoreError>;
}
