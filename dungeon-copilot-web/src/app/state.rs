use dungeon_copilot_engine::{CourseData, ProgressionState};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub course: UseStateHandle<CourseData>,
    pub progress: UseStateHandle<ProgressionState>,
    pub boot_ready: UseStateHandle<bool>,
    /// Transient navigation-denied notice; `None` hides the banner.
    pub notice: UseStateHandle<Option<AttrValue>>,
    pub celebrating: UseStateHandle<bool>,
    pub show_reset: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        course: use_state(CourseData::empty),
        progress: use_state(|| ProgressionState::new(&CourseData::empty())),
        boot_ready: use_state(|| false),
        notice: use_state(|| None::<AttrValue>),
        celebrating: use_state(|| false),
        show_reset: use_state(|| false),
    }
}
