use dungeon_copilot_engine::{
    CHECKBOX_KEY, CourseData, ProgressStorage, ProgressionEngine, SECTION_KEY, SectionId,
};
use dungeon_copilot_web::dom;
use dungeon_copilot_web::storage::BrowserStorage;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn clear_store() {
    let storage = dom::local_storage().expect("localStorage");
    let _ = storage.remove_item(CHECKBOX_KEY);
    let _ = storage.remove_item(SECTION_KEY);
}

#[wasm_bindgen_test]
fn checkbox_snapshot_round_trips_through_local_storage() {
    clear_store();
    let engine = ProgressionEngine::new(CourseData::load_from_static(), BrowserStorage);
    let mut progress = engine.new_progress();
    progress.toggle_item(0, 0).unwrap();
    progress.toggle_item(0, 1).unwrap();
    engine.save_checkboxes(&progress).expect("save");

    let mut restored = engine.new_progress();
    let applied = engine.restore_checkboxes(&mut restored).expect("load");
    assert!(applied >= 2);
    assert_eq!(restored.checklist(), progress.checklist());
}

#[wasm_bindgen_test]
fn section_key_is_written_but_never_restored() {
    clear_store();
    let engine = ProgressionEngine::new(CourseData::load_from_static(), BrowserStorage);
    let mut progress = engine.new_progress();
    progress.navigate(SectionId::QuestMap).unwrap();
    engine.save_section(&progress).expect("save section");

    let storage = dom::local_storage().expect("localStorage");
    assert_eq!(
        storage.get_item(SECTION_KEY).unwrap().as_deref(),
        Some("quest-map")
    );

    let mut fresh = engine.new_progress();
    engine.restore_checkboxes(&mut fresh).expect("load");
    assert_eq!(fresh.active(), SectionId::Landing);
}

#[wasm_bindgen_test]
fn garbage_snapshots_are_discarded() {
    clear_store();
    let storage = dom::local_storage().expect("localStorage");
    storage.set_item(CHECKBOX_KEY, "{broken").unwrap();

    let engine = ProgressionEngine::new(CourseData::load_from_static(), BrowserStorage);
    let mut progress = engine.new_progress();
    assert_eq!(engine.restore_checkboxes(&mut progress).expect("load"), 0);
}

#[wasm_bindgen_test]
fn clear_removes_both_keys() {
    let engine = ProgressionEngine::new(CourseData::load_from_static(), BrowserStorage);
    let mut progress = engine.new_progress();
    progress.toggle_item(0, 0).unwrap();
    engine.save_checkboxes(&progress).expect("save");
    engine.save_section(&progress).expect("save section");

    BrowserStorage.clear().expect("clear");
    let storage = dom::local_storage().expect("localStorage");
    assert!(storage.get_item(CHECKBOX_KEY).unwrap().is_none());
    assert!(storage.get_item(SECTION_KEY).unwrap().is_none());
}
