// Record store: load/save/find/update/append over JSON collection files.

mod common;

use serde_json::{Value, json};

use common::setup_test_store;
use fallakte::AppError;
use fallakte::models::case::Case;
use fallakte::store::{Record, generate_id};

fn make_case(id: &str, defendant: &str) -> Case {
    Case {
        id: id.to_string(),
        defendant: defendant.to_string(),
        charge: "Diebstahl".to_string(),
        status: "open".to_string(),
        judge_id: None,
        judge_name: None,
        trial_date: None,
        verdict: None,
        verdict_date: None,
        date_created: "2025-01-01 09:00:00".to_string(),
        created_by: "Vogel".to_string(),
        last_modified: "2025-01-01 09:00:00".to_string(),
        last_modified_by: "Vogel".to_string(),
        extra: serde_json::Map::new(),
    }
}

#[test]
fn missing_collection_loads_empty() {
    let (_dir, store) = setup_test_store();
    let cases: Vec<Case> = store.load().expect("load");
    assert!(cases.is_empty());
}

#[test]
fn empty_file_loads_empty() {
    let (dir, store) = setup_test_store();
    std::fs::write(dir.path().join(Case::COLLECTION), "").expect("write");
    let cases: Vec<Case> = store.load().expect("load");
    assert!(cases.is_empty());
}

#[test]
fn malformed_json_is_a_storage_error() {
    let (dir, store) = setup_test_store();
    std::fs::write(dir.path().join(Case::COLLECTION), "{not json").expect("write");
    let err = store.load::<Case>().unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
    assert!(err.is_storage());
}

#[test]
fn save_then_load_preserves_content_and_order() {
    let (_dir, store) = setup_test_store();
    let cases = vec![make_case("c1", "A"), make_case("c2", "B"), make_case("c3", "C")];
    store.save(&cases).expect("save");

    let loaded: Vec<Case> = store.load().expect("load");
    assert_eq!(loaded.len(), 3);
    let ids: Vec<&str> = loaded.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
    assert_eq!(loaded[1].defendant, "B");
}

#[test]
fn save_of_loaded_collection_is_a_content_noop() {
    let (dir, store) = setup_test_store();
    store
        .save(&[make_case("c1", "A"), make_case("c2", "B")])
        .expect("save");
    let before: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join(Case::COLLECTION)).unwrap())
            .unwrap();

    let loaded: Vec<Case> = store.load().expect("load");
    store.save(&loaded).expect("re-save");
    let after: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join(Case::COLLECTION)).unwrap())
            .unwrap();
    assert_eq!(before, after);
}

#[test]
fn unknown_fields_survive_read_modify_write() {
    let (dir, store) = setup_test_store();
    // Another page wrote fields this core does not model.
    let raw = json!([{
        "id": "c1",
        "defendant": "A",
        "charge": "Diebstahl",
        "status": "open",
        "date_created": "2025-01-01 09:00:00",
        "created_by": "Vogel",
        "last_modified": "2025-01-01 09:00:00",
        "last_modified_by": "Vogel",
        "aktenzeichen": "AZ-2025-0042",
        "tags": ["eilverfahren"]
    }]);
    std::fs::write(
        dir.path().join(Case::COLLECTION),
        serde_json::to_string_pretty(&raw).unwrap(),
    )
    .expect("write");

    store
        .update_record::<Case, _>("c1", |c| c.status = "pending".to_string())
        .expect("update");

    let after: Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join(Case::COLLECTION)).unwrap())
            .unwrap();
    assert_eq!(after[0]["status"], "pending");
    assert_eq!(after[0]["aktenzeichen"], "AZ-2025-0042");
    assert_eq!(after[0]["tags"], json!(["eilverfahren"]));
}

#[test]
fn update_touches_only_the_matching_record() {
    let (_dir, store) = setup_test_store();
    store
        .save(&[make_case("c1", "A"), make_case("c2", "B"), make_case("c3", "C")])
        .expect("save");

    store
        .update_record::<Case, _>("c2", |c| {
            c.status = "pending".to_string();
            c.last_modified_by = "Hartmann".to_string();
        })
        .expect("update");

    let loaded: Vec<Case> = store.load().expect("load");
    assert_eq!(loaded[0].status, "open");
    assert_eq!(loaded[1].status, "pending");
    assert_eq!(loaded[1].last_modified_by, "Hartmann");
    assert_eq!(loaded[2].status, "open");
    // Ordering is stable across an update.
    let ids: Vec<&str> = loaded.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c2", "c3"]);
}

#[test]
fn update_of_unknown_id_is_not_found() {
    let (_dir, store) = setup_test_store();
    store.save(&[make_case("c1", "A")]).expect("save");
    let err = store
        .update_record::<Case, _>("nonexistent", |c| c.status = "pending".to_string())
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[test]
fn find_by_id_misses_return_none() {
    let (_dir, store) = setup_test_store();
    assert!(store.find_by_id::<Case>("nonexistent").expect("find").is_none());
    store.save(&[make_case("c1", "A")]).expect("save");
    assert!(store.find_by_id::<Case>("nonexistent").expect("find").is_none());
    assert!(store.find_by_id::<Case>("c1").expect("find").is_some());
}

#[test]
fn append_adds_to_the_end() {
    let (_dir, store) = setup_test_store();
    store.save(&[make_case("c1", "A")]).expect("save");
    store.append_record(make_case("c2", "B")).expect("append");
    let loaded: Vec<Case> = store.load().expect("load");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].id, "c2");
}

#[test]
fn save_leaves_no_temp_file_behind() {
    let (dir, store) = setup_test_store();
    store.save(&[make_case("c1", "A")]).expect("save");
    let tmp = dir.path().join(format!("{}.tmp", Case::COLLECTION));
    assert!(!tmp.exists());
    assert!(dir.path().join(Case::COLLECTION).exists());
}

#[test]
fn generated_ids_are_opaque_and_unique() {
    let a = generate_id();
    let b = generate_id();
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}
