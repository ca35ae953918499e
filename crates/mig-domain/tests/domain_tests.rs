use mig_domain::{decompose, DeliveryUnitEntry, FileRecord, UserData};

#[test]
fn projection_is_pure_and_deterministic() {
    let path = "/registry/transport/workspaces/demo/projA/rules/pricing.calc";
    let first = decompose(path).expect("valid path");
    let second = decompose(path).expect("valid path");
    assert_eq!(first, second, "same input must yield identical projections");
    assert_eq!(first.run_location, "/projA/rules/pricing.calc");
    assert_eq!(first.relative_path, "/rules/pricing.calc");
}

#[test]
fn file_record_keeps_the_original_repository_path() {
    let path = "/registry/transport/workspaces/demo/projA/pricing.calc";
    let record = FileRecord::from_repository_path(path, "projA", "du-9").expect("valid path");
    assert_eq!(record.repository_path, path);
}

#[test]
fn user_data_round_trip_preserves_delivery_units() {
    let mut data = UserData::new("demo", vec!["/registry/transport/workspaces/demo/projA".into()]);
    data.du.push(DeliveryUnitEntry { delivery_unit_id: "du-1".into(),
                                     locals: vec!["f-1".into(), "f-2".into()] });
    let text = serde_json::to_string(&data).expect("serialize");
    let back: UserData = serde_json::from_str(&text).expect("deserialize");
    assert_eq!(back, data, "userData must round-trip through its text form");
    assert!(!back.du[0].is_empty());
}

#[test]
fn empty_delivery_unit_entry_is_detectable() {
    let entry = DeliveryUnitEntry { delivery_unit_id: "du-2".into(),
                                    locals: vec![] };
    assert!(entry.is_empty());
}
