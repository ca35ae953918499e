//! Binario de validación: corrida completa del pipeline de migración sobre
//! un repositorio en memoria con dos colecciones de origen (una con
//! archivos, otra vacía). Imprime el estado final, el catálogo y el diff
//! persistido.

use std::cell::RefCell;
use std::rc::Rc;

use mig_adapters::{ArchiveIntakeTask, DiffViewData, MigrationService, ProjectPopulationTask,
                   WorkspaceMigrationService};
use mig_core::{ExecutionContext, InMemoryProcessVariables, InMemoryRepository, MigrationEngine,
               Repository, DIFF_VIEW_DATA_FILE_NAME, MIGRATION_STATE, USER_DATA};
use mig_domain::UserData;
use mig_persistence::{InMemoryFileRecordStore, RepoConfig};

const PROJ_A: &str = "/registry/transport/workspaces/demo/projA";
const PROJ_B: &str = "/registry/transport/workspaces/demo/projB";

fn seed_source_tree(repo: &mut InMemoryRepository, repository_root: &str) {
    repo.write_resource(&format!("{PROJ_A}/pricing.calc"), "rule pricing v1").expect("seed");
    repo.write_resource(&format!("{PROJ_A}/rules/discount.calc"), "rule discount v1").expect("seed");
    repo.write_resource(&format!("{PROJ_A}/rules/tax.calc"), "rule tax v1").expect("seed");
    repo.create_collection(PROJ_B).expect("seed");
    // snapshot pre-migración con un archivo que la migración reemplaza
    repo.write_resource(&format!("{repository_root}/demo_unmodified/projA/pricing.calc"),
                        "rule pricing v0")
        .expect("seed");
}

fn main() {
    let config = RepoConfig::from_env();
    println!("== migflow demo (repository root: {}) ==", config.root);

    let mut seeded = InMemoryRepository::new();
    seed_source_tree(&mut seeded, &config.root);
    let repo = Rc::new(RefCell::new(seeded));
    let store = Rc::new(RefCell::new(InMemoryFileRecordStore::new()));

    let vars = Rc::new(RefCell::new(InMemoryProcessVariables::new()));
    let ctx = ExecutionContext::new("demo-run-1", vars.clone());
    ctx.set_json(USER_DATA, &UserData::new("demo", vec![PROJ_A.into(), PROJ_B.into()]))
       .expect("seed userData");

    let service: Rc<RefCell<dyn MigrationService>> =
        Rc::new(RefCell::new(WorkspaceMigrationService::new(repo.clone(), store.clone(), config.root.clone())));
    let mut engine = MigrationEngine::new()
        .add_task(Box::new(ArchiveIntakeTask::new(repo.clone(), store.clone())))
        .add_task(Box::new(ProjectPopulationTask::new(repo.clone(), service, config.root.clone())));

    let state = engine.run(&ctx);
    println!("terminal state: {state:?}");
    println!("migrationState: {:?}", ctx.get_var(MIGRATION_STATE));

    let user_data: UserData = ctx.get_json(USER_DATA).expect("userData");
    for unit in &user_data.du {
        println!("delivery unit {} -> {} files", unit.delivery_unit_id, unit.locals.len());
    }

    if let Some(diff_path) = ctx.get_var(DIFF_VIEW_DATA_FILE_NAME) {
        println!("diff persisted at {diff_path}");
        let raw = repo.borrow().read_resource(&diff_path).expect("diff resource");
        let diff: DiffViewData = serde_json::from_str(&raw).expect("diff payload");
        for entry in &diff.entries {
            println!("  {:?} {}", entry.status, entry.path);
        }
    }
}
