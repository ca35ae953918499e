use std::cell::RefCell;
use std::rc::Rc;

use mig_adapters::ArchiveIntakeTask;
use mig_core::context::{ExecutionContext, MIGRATION_STATE, USER_DATA};
use mig_core::repo::{InMemoryRepository, Repository};
use mig_core::task::run_task;
use mig_core::track::LogTracker;
use mig_core::{InMemoryProcessVariables, ProcessVariables};
use mig_domain::UserData;
use mig_persistence::{FileRecordStore, InMemoryFileRecordStore};

const PROJ_A: &str = "/registry/transport/workspaces/demo/projA";
const PROJ_B: &str = "/registry/transport/workspaces/demo/projB";

fn seeded_repository() -> Rc<RefCell<InMemoryRepository>> {
    let mut repo = InMemoryRepository::new();
    repo.write_resource(&format!("{PROJ_A}/pricing.calc"), "rule pricing").expect("write");
    repo.write_resource(&format!("{PROJ_A}/rules/discount.calc"), "rule discount").expect("write");
    repo.write_resource(&format!("{PROJ_A}/rules/tax.calc"), "rule tax").expect("write");
    repo.create_collection(PROJ_B).expect("mkdir");
    Rc::new(RefCell::new(repo))
}

fn context_with_user_data(zip_path: Vec<String>) -> (ExecutionContext, Rc<RefCell<InMemoryProcessVariables>>) {
    let vars = Rc::new(RefCell::new(InMemoryProcessVariables::new()));
    let ctx = ExecutionContext::new("run-1", vars.clone());
    ctx.set_json(USER_DATA, &UserData::new("demo", zip_path)).expect("seed userData");
    (ctx, vars)
}

#[test]
fn intake_catalogs_each_source_path_into_one_delivery_unit() {
    let repo = seeded_repository();
    let store = Rc::new(RefCell::new(InMemoryFileRecordStore::new()));
    let (ctx, vars) = context_with_user_data(vec![PROJ_A.into(), PROJ_B.into()]);

    let mut task = ArchiveIntakeTask::new(repo, store.clone());
    let state = run_task(&mut task, &ctx, &mut LogTracker);
    assert!(!state.is_failed(), "intake should succeed: {state:?}");
    assert_eq!(vars.borrow().get("run-1", MIGRATION_STATE).as_deref(),
               Some("FROM_LOCAL_ZIP_EXECUTED"));

    let user_data: UserData = ctx.get_json(USER_DATA).expect("userData rewritten");
    assert_eq!(user_data.du.len(), 2, "one entry per source path");
    assert_eq!(user_data.du[0].locals.len(), 3);
    assert!(user_data.du[1].locals.is_empty(), "empty collection yields empty locals");
    assert_eq!(store.borrow().file_record_count(), 3);

    let first = store.borrow().file_record(&user_data.du[0].locals[0]).expect("record").clone();
    assert_eq!(first.repository_path, format!("{PROJ_A}/pricing.calc"));
    assert_eq!(first.run_location, "/projA/pricing.calc");
    assert_eq!(first.relative_path, "/pricing.calc");
    assert_eq!(first.project_name, "projA");
    assert_eq!(first.delivery_unit_id, user_data.du[0].delivery_unit_id);
}

#[test]
fn intake_is_deterministic_over_the_same_source_tree() {
    let repo = seeded_repository();
    let store = Rc::new(RefCell::new(InMemoryFileRecordStore::new()));
    let (ctx, _vars) = context_with_user_data(vec![PROJ_A.into()]);

    let mut task = ArchiveIntakeTask::new(repo, store.clone());
    let paths_of = |store: &Rc<RefCell<InMemoryFileRecordStore>>, user_data: &UserData| -> Vec<(String, String)> {
        user_data.du[0].locals
                       .iter()
                       .map(|id| {
                           let borrowed = store.borrow();
                           let record = borrowed.file_record(id).expect("record");
                           (record.run_location.clone(), record.relative_path.clone())
                       })
                       .collect()
    };

    assert!(!run_task(&mut task, &ctx, &mut LogTracker).is_failed());
    let first: UserData = ctx.get_json(USER_DATA).expect("first run");
    let first_paths = paths_of(&store, &first);

    assert!(!run_task(&mut task, &ctx, &mut LogTracker).is_failed());
    let second: UserData = ctx.get_json(USER_DATA).expect("second run");
    let second_paths = paths_of(&store, &second);

    assert_eq!(first_paths, second_paths, "path derivation must be pure and deterministic");
    assert_eq!(second.du.len(), 1, "catalog is rebuilt, not appended");
}

#[test]
fn unresolvable_source_path_fails_the_whole_task() {
    let repo = seeded_repository();
    let store = Rc::new(RefCell::new(InMemoryFileRecordStore::new()));
    let missing = "/registry/transport/workspaces/demo/ghost";
    let (ctx, vars) = context_with_user_data(vec![missing.into(), PROJ_A.into()]);

    let mut task = ArchiveIntakeTask::new(repo, store.clone());
    let state = run_task(&mut task, &ctx, &mut LogTracker);

    assert!(state.is_failed());
    assert_eq!(vars.borrow().get("run-1", MIGRATION_STATE).as_deref(), Some("FROM_LOCAL_ZIP_FAILED"));
    let reason = vars.borrow().get("run-1", "FROM_LOCAL_ZIP_FAILED_REASON").expect("reason set");
    assert!(reason.contains(missing), "reason should name the path: {reason}");
    // no hay continuación parcial: la ruta válida posterior no se procesa
    assert_eq!(store.borrow().file_record_count(), 0);
}

#[test]
fn paths_below_the_fixed_prefix_depth_fail_fast() {
    let mut shallow = InMemoryRepository::new();
    shallow.write_resource("/shallow/file.txt", "x").expect("write");
    let repo = Rc::new(RefCell::new(shallow));
    let store = Rc::new(RefCell::new(InMemoryFileRecordStore::new()));
    let (ctx, vars) = context_with_user_data(vec!["/shallow".into()]);

    let mut task = ArchiveIntakeTask::new(repo, store);
    let state = run_task(&mut task, &ctx, &mut LogTracker);

    assert!(state.is_failed(), "short repository paths are a contract violation");
    let reason = vars.borrow().get("run-1", "FROM_LOCAL_ZIP_FAILED_REASON").expect("reason set");
    assert!(reason.contains("segments"), "reason should describe the derivation error: {reason}");
}
