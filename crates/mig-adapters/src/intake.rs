//! ArchiveIntakeTask
//!
//! Primera tarea del pipeline: consume las rutas de colección de origen de
//! `userData.zipPath`, cataloga sus recursos hoja, persiste los metadatos de
//! unidad de entrega y archivo, y reescribe `userData` con el catálogo
//! (`du`) en el contexto de ejecución.
//!
//! Cualquier fallo (ruta irresoluble, persistencia, derivación de ruta,
//! serialización) aborta la tarea completa; no hay continuación parcial
//! entre rutas. Una colección resoluble pero vacía no es un fallo: produce
//! una unidad con `locals` vacío.

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use mig_core::catalog::catalog_resources;
use mig_core::context::{ExecutionContext, USER_DATA};
use mig_core::errors::CoreError;
use mig_core::repo::{collection_name, Repository};
use mig_core::task::{MigrationTask, TaskLabels};
use mig_domain::{DeliveryUnitEntry, DeliveryUnitRecord, FileRecord, UserData};
use mig_persistence::FileRecordStore;

use crate::task_error;

pub const INTAKE_LABELS: TaskLabels =
    TaskLabels::new("FROM_LOCAL_ZIP", "FROM_LOCAL_ZIP_EXECUTED", "FROM_LOCAL_ZIP_FAILED");

pub struct ArchiveIntakeTask {
    repository: Rc<RefCell<dyn Repository>>,
    store: Rc<RefCell<dyn FileRecordStore>>,
    labels: TaskLabels,
}

impl ArchiveIntakeTask {
    pub fn new(repository: Rc<RefCell<dyn Repository>>, store: Rc<RefCell<dyn FileRecordStore>>) -> Self {
        Self { repository,
               store,
               labels: INTAKE_LABELS }
    }
}

impl MigrationTask for ArchiveIntakeTask {
    fn id(&self) -> &str {
        "archive_intake"
    }

    fn labels(&self) -> &TaskLabels {
        &self.labels
    }

    fn work(&mut self, ctx: &ExecutionContext) -> Result<(), CoreError> {
        let mut user_data: UserData = ctx.get_json(USER_DATA)?;
        // el catálogo se reconstruye desde cero en cada invocación
        user_data.du.clear();

        let repo = self.repository.borrow();
        let mut store = self.store.borrow_mut();
        let paths = user_data.zip_path.clone();

        for path in &paths {
            info!("processing source collection {path}");
            if !repo.collection_exists(path) {
                return Err(CoreError::CollectionNotFound(path.clone()));
            }
            let project_name = collection_name(path).to_string();
            let leaves = catalog_resources(&*repo, path)?;

            let delivery_unit_id = store.create_delivery_unit(DeliveryUnitRecord::new(&project_name))
                                        .map_err(task_error)?;

            let mut locals = Vec::with_capacity(leaves.len());
            for repository_path in &leaves {
                let record = FileRecord::from_repository_path(repository_path, &project_name, &delivery_unit_id)
                    .map_err(task_error)?;
                let file_id = store.create_file_record(record).map_err(task_error)?;
                locals.push(file_id);
            }
            info!("catalogued {} resources for project {project_name}", locals.len());

            user_data.du.push(DeliveryUnitEntry { delivery_unit_id, locals });
        }

        ctx.set_json(USER_DATA, &user_data)
    }
}
