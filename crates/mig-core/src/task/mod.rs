pub mod definition;
pub mod envelope;
pub mod state;

pub use definition::MigrationTask;
pub use envelope::run_task;
pub use state::{TaskLabels, TaskState};
