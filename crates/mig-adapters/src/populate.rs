//! ProjectPopulationTask
//!
//! Segunda tarea del pipeline: consume el catálogo `userData.du` y puebla el
//! workspace destino delegando en el servicio de transformación, unidad por
//! unidad y en orden estricto (no generados, generados, modificación,
//! commit). Las unidades vacías se saltan con aviso; un error de cualquier
//! paso aborta la tarea completa sin rollback de las unidades ya
//! consolidadas.
//!
//! Al terminar todas las unidades compara el snapshot pre-migración con el
//! workspace poblado, descarta la carpeta temporal de trabajo si existe,
//! persiste el diff y publica su ruta en `diffViewDataFileName`.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};

use mig_core::context::{ExecutionContext, DIFF_VIEW_DATA_FILE_NAME, USER_DATA};
use mig_core::errors::CoreError;
use mig_core::repo::{join_path, Repository};
use mig_core::task::{MigrationTask, TaskLabels};
use mig_domain::UserData;

use crate::diff::{compute_tree_diff, persist_diff};
use crate::service::MigrationService;

pub const POPULATE_LABELS: TaskLabels =
    TaskLabels::new("POPULATING_PROJECTS", "MIGRATION_EXECUTED", "POPULATING_PROJECTS_FAILED");

/// Sufijo del snapshot pre-migración del workspace.
pub const UNMODIFIED_SUFFIX: &str = "_unmodified";
/// Sufijo de la carpeta temporal de trabajo descartada tras el diff.
pub const TMP_SUFFIX: &str = "_tmp";

pub struct ProjectPopulationTask {
    repository: Rc<RefCell<dyn Repository>>,
    service: Rc<RefCell<dyn MigrationService>>,
    repository_root: String,
    labels: TaskLabels,
}

impl ProjectPopulationTask {
    pub fn new(repository: Rc<RefCell<dyn Repository>>,
               service: Rc<RefCell<dyn MigrationService>>,
               repository_root: impl Into<String>)
               -> Self {
        Self { repository,
               service,
               repository_root: repository_root.into(),
               labels: POPULATE_LABELS }
    }
}

impl MigrationTask for ProjectPopulationTask {
    fn id(&self) -> &str {
        "project_population"
    }

    fn labels(&self) -> &TaskLabels {
        &self.labels
    }

    fn work(&mut self, ctx: &ExecutionContext) -> Result<(), CoreError> {
        let user_data: UserData = ctx.get_json(USER_DATA)?;
        let workspace = user_data.workspace.clone();

        {
            let mut service = self.service.borrow_mut();
            for unit in &user_data.du {
                if unit.is_empty() {
                    warn!("delivery unit {} has no files, skipping", unit.delivery_unit_id);
                    continue;
                }
                service.add_files_without_generated(&user_data, &workspace, &unit.locals)?;
                service.add_generated_files(&user_data, unit, &workspace, &unit.locals)?;
                service.modify_files(&workspace, &unit.locals)?;
                service.commit(&workspace, unit)?;
                info!("populated delivery unit {} ({} files)", unit.delivery_unit_id, unit.locals.len());
            }
        }

        let before_root = join_path(&self.repository_root, &format!("{workspace}{UNMODIFIED_SUFFIX}"));
        let after_root = join_path(&self.repository_root, &workspace);
        let tmp_root = join_path(&self.repository_root, &format!("{workspace}{TMP_SUFFIX}"));

        let mut repo = self.repository.borrow_mut();
        let diff = compute_tree_diff(&*repo, &before_root, &after_root)?;
        if repo.collection_exists(&tmp_root) {
            repo.remove_collection(&tmp_root)?;
        }
        let stored_path = persist_diff(&mut *repo, ctx.id(), &diff)?;
        ctx.set_var(DIFF_VIEW_DATA_FILE_NAME, &stored_path);
        Ok(())
    }
}
