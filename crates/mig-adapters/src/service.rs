//! Frontera con el servicio de transformación de contenidos.
//!
//! Las reglas de negocio que transforman archivos individuales quedan fuera
//! de este núcleo; la tarea de población delega en este trait en orden
//! estricto: añadir no generados, añadir generados, modificar, y commit por
//! unidad.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use mig_core::errors::CoreError;
use mig_core::repo::{join_path, Repository};
use mig_domain::{DeliveryUnitEntry, UserData};
use mig_persistence::FileRecordStore;

use crate::task_error;

pub trait MigrationService {
    /// Copia al workspace los archivos de la unidad que no son generados.
    fn add_files_without_generated(&mut self,
                                   user_data: &UserData,
                                   workspace: &str,
                                   locals: &[String])
                                   -> Result<(), CoreError>;

    /// Genera y añade los artefactos derivados de la unidad.
    fn add_generated_files(&mut self,
                           user_data: &UserData,
                           unit: &DeliveryUnitEntry,
                           workspace: &str,
                           locals: &[String])
                           -> Result<(), CoreError>;

    /// Aplica las transformaciones de contenido sobre los archivos migrados.
    fn modify_files(&mut self, workspace: &str, locals: &[String]) -> Result<(), CoreError>;

    /// Consolida las modificaciones de la unidad antes de pasar a la
    /// siguiente.
    fn commit(&mut self, workspace: &str, unit: &DeliveryUnitEntry) -> Result<(), CoreError>;
}

/// Implementación de referencia: materializa cada archivo catalogado bajo
/// `<raíz>/<workspace><runLocation>` resolviendo los identificadores a
/// través del almacén de registros. Los pasos de generación y modificación
/// son puntos de extensión de las reglas de transformación.
pub struct WorkspaceMigrationService {
    repository: Rc<RefCell<dyn Repository>>,
    store: Rc<RefCell<dyn FileRecordStore>>,
    repository_root: String,
}

impl WorkspaceMigrationService {
    pub fn new(repository: Rc<RefCell<dyn Repository>>,
               store: Rc<RefCell<dyn FileRecordStore>>,
               repository_root: impl Into<String>)
               -> Self {
        Self { repository,
               store,
               repository_root: repository_root.into() }
    }
}

impl MigrationService for WorkspaceMigrationService {
    fn add_files_without_generated(&mut self,
                                   _user_data: &UserData,
                                   workspace: &str,
                                   locals: &[String])
                                   -> Result<(), CoreError> {
        let store = self.store.borrow();
        let mut repo = self.repository.borrow_mut();
        let workspace_root = join_path(&self.repository_root, workspace);
        for file_id in locals {
            let record = store.file_record(file_id).map_err(task_error)?;
            let content = repo.read_resource(&record.repository_path)?;
            let target = format!("{workspace_root}{}", record.run_location);
            repo.write_resource(&target, &content)?;
        }
        Ok(())
    }

    fn add_generated_files(&mut self,
                           _user_data: &UserData,
                           unit: &DeliveryUnitEntry,
                           workspace: &str,
                           _locals: &[String])
                           -> Result<(), CoreError> {
        debug!("no generated artifacts for delivery unit {} in workspace {workspace}",
               unit.delivery_unit_id);
        Ok(())
    }

    fn modify_files(&mut self, workspace: &str, locals: &[String]) -> Result<(), CoreError> {
        debug!("content transformation hook: {} files in workspace {workspace}", locals.len());
        Ok(())
    }

    fn commit(&mut self, workspace: &str, unit: &DeliveryUnitEntry) -> Result<(), CoreError> {
        debug!("committed delivery unit {} into workspace {workspace}", unit.delivery_unit_id);
        Ok(())
    }
}
