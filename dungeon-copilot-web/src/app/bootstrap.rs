#[cfg(any(target_arch = "wasm32", test))]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use crate::storage::BrowserStorage;
#[cfg(any(target_arch = "wasm32", test))]
use dungeon_copilot_engine::{CourseData, ProgressionEngine};
#[cfg(any(target_arch = "wasm32", test))]
use yew::prelude::*;

#[cfg(any(target_arch = "wasm32", test))]
#[derive(Clone)]
struct BootstrapHandles {
    course: UseStateHandle<CourseData>,
    progress: UseStateHandle<dungeon_copilot_engine::ProgressionState>,
    boot_ready: UseStateHandle<bool>,
}

#[cfg(any(target_arch = "wasm32", test))]
fn handles_from_state(app_state: &AppState) -> BootstrapHandles {
    BootstrapHandles {
        course: app_state.course.clone(),
        progress: app_state.progress.clone(),
        boot_ready: app_state.boot_ready.clone(),
    }
}

/// Load the embedded course and restore whatever checkbox state a previous
/// visit left behind. The active section is never restored: every visit
/// starts on the landing page, only the checklist survives.
#[cfg(any(target_arch = "wasm32", test))]
fn bootstrap_load(handles: &BootstrapHandles) {
    let course = CourseData::load_from_static();
    let engine = ProgressionEngine::new(course.clone(), BrowserStorage);
    let mut progress = engine.new_progress();

    match engine.restore_checkboxes(&mut progress) {
        Ok(applied) if applied > 0 => {
            log::info!("restored {applied} saved checklist entries");
        }
        Ok(_) => {}
        Err(err) => {
            log::warn!("could not load saved progress: {err}");
        }
    }

    handles.course.set(course);
    handles.progress.set(progress);
    handles.boot_ready.set(true);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let handles = handles_from_state(app_state);

    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            bootstrap_load(&handles);
        });
        || {}
    });
}
