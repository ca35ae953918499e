//! Colaborador de seguimiento de estado legible.

/// Recibe los textos de estado que la UI muestra durante una corrida.
pub trait StatusTracker {
    fn update_status(&mut self, status: &str);
}

/// Tracker por defecto: publica el estado en el log.
pub struct LogTracker;

impl StatusTracker for LogTracker {
    fn update_status(&mut self, status: &str) {
        log::info!("migration status: {status}");
    }
}
