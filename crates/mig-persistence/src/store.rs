//! Almacén de metadatos de unidades de entrega y archivos.
//!
//! Desde el punto de vista del pipeline es append-only: los registros se
//! crean una vez durante el intake y nunca se actualizan. El almacén genera
//! los identificadores y los devuelve al llamador.

use mig_domain::{DeliveryUnitRecord, FileRecord};
use uuid::Uuid;

use crate::error::PersistenceError;

pub trait FileRecordStore {
    /// Persiste los metadatos de una unidad de entrega y devuelve su
    /// identificador generado.
    fn create_delivery_unit(&mut self, record: DeliveryUnitRecord) -> Result<String, PersistenceError>;
    /// Persiste un registro de archivo y devuelve su identificador generado.
    fn create_file_record(&mut self, record: FileRecord) -> Result<String, PersistenceError>;
    fn delivery_unit(&self, id: &str) -> Result<&DeliveryUnitRecord, PersistenceError>;
    fn file_record(&self, id: &str) -> Result<&FileRecord, PersistenceError>;
    fn file_record_count(&self) -> usize;
}

/// Implementación en memoria con orden de inserción.
#[derive(Default)]
pub struct InMemoryFileRecordStore {
    delivery_units: Vec<(String, DeliveryUnitRecord)>,
    file_records: Vec<(String, FileRecord)>,
}

impl InMemoryFileRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileRecordStore for InMemoryFileRecordStore {
    fn create_delivery_unit(&mut self, record: DeliveryUnitRecord) -> Result<String, PersistenceError> {
        let id = Uuid::new_v4().to_string();
        self.delivery_units.push((id.clone(), record));
        Ok(id)
    }

    fn create_file_record(&mut self, record: FileRecord) -> Result<String, PersistenceError> {
        let id = Uuid::new_v4().to_string();
        self.file_records.push((id.clone(), record));
        Ok(id)
    }

    fn delivery_unit(&self, id: &str) -> Result<&DeliveryUnitRecord, PersistenceError> {
        self.delivery_units
            .iter()
            .find(|(unit_id, _)| unit_id == id)
            .map(|(_, record)| record)
            .ok_or_else(|| PersistenceError::NotFound(format!("delivery unit {id}")))
    }

    fn file_record(&self, id: &str) -> Result<&FileRecord, PersistenceError> {
        self.file_records
            .iter()
            .find(|(file_id, _)| file_id == id)
            .map(|(_, record)| record)
            .ok_or_else(|| PersistenceError::NotFound(format!("file record {id}")))
    }

    fn file_record_count(&self) -> usize {
        self.file_records.len()
    }
}
