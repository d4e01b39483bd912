use crate::a11y;
use crate::app::state::AppState;
use crate::storage::BrowserStorage;
use dungeon_copilot_engine::{
    NavigationDenied, ProgressEvent, ProgressStorage, SectionId, Transition,
};
use yew::prelude::*;

/// Shared after-navigation bookkeeping: record the section (write-only, it is
/// never read back at startup), scroll up, and schedule the celebration when
/// the terminal section opens.
pub(super) fn after_enter(celebrating: &UseStateHandle<bool>, transition: &Transition) {
    if let Err(err) = BrowserStorage.save_section(transition.to) {
        log::warn!("could not save progress: {err}");
    }
    #[cfg(target_arch = "wasm32")]
    crate::dom::scroll_to_top();
    if transition.events.contains(&ProgressEvent::CourseCompleted) {
        schedule_celebration(celebrating.clone());
    }
}

fn schedule_celebration(celebrating: UseStateHandle<bool>) {
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        // Give the section change half a beat to settle before the rain.
        let _ = crate::dom::sleep_ms(500).await;
        celebrating.set(true);
    });
    #[cfg(not(target_arch = "wasm32"))]
    celebrating.set(true);
}

fn deny(notice: &UseStateHandle<Option<AttrValue>>, denial: &NavigationDenied) {
    let message = match denial {
        NavigationDenied::StageLocked(_) | NavigationDenied::UnknownStage(_) => {
            crate::i18n::t("notice.stage_locked")
        }
        NavigationDenied::ChecklistIncomplete => crate::i18n::t("notice.checklist_incomplete"),
        // No control leads past the end; nothing to tell the learner.
        NavigationDenied::AtEnd(_) => return,
    };
    a11y::announce(&message);
    notice.set(Some(message.into()));
}

pub fn build_navigate(state: &AppState) -> Callback<SectionId> {
    let progress_handle = state.progress.clone();
    let notice_handle = state.notice.clone();
    let celebrating = state.celebrating.clone();
    Callback::from(move |target: SectionId| {
        let mut next = (*progress_handle).clone();
        match next.navigate(target) {
            Ok(transition) => {
                notice_handle.set(None);
                progress_handle.set(next);
                after_enter(&celebrating, &transition);
            }
            Err(denial) => deny(&notice_handle, &denial),
        }
    })
}

pub fn build_navigate_next(state: &AppState) -> Callback<()> {
    let progress_handle = state.progress.clone();
    let notice_handle = state.notice.clone();
    let celebrating = state.celebrating.clone();
    Callback::from(move |()| {
        let mut next = (*progress_handle).clone();
        match next.navigate_next() {
            Ok(transition) => {
                notice_handle.set(None);
                progress_handle.set(next);
                after_enter(&celebrating, &transition);
            }
            Err(denial) => deny(&notice_handle, &denial),
        }
    })
}

/// Bookkeeping for a section change already applied by the router sync.
pub fn build_route_entered(state: &AppState) -> Callback<Transition> {
    let celebrating = state.celebrating.clone();
    Callback::from(move |transition: Transition| {
        after_enter(&celebrating, &transition);
    })
}

pub fn build_escape_to_map(state: &AppState) -> Callback<()> {
    let progress_handle = state.progress.clone();
    let celebrating = state.celebrating.clone();
    Callback::from(move |()| {
        let Some(target) = crate::input::escape_target(progress_handle.active()) else {
            return;
        };
        let mut next = (*progress_handle).clone();
        if let Ok(transition) = next.navigate(target) {
            progress_handle.set(next);
            after_enter(&celebrating, &transition);
        }
    })
}

pub fn build_dismiss_notice(state: &AppState) -> Callback<()> {
    let notice_handle = state.notice.clone();
    Callback::from(move |()| notice_handle.set(None))
}

pub fn build_finish_celebration(state: &AppState) -> Callback<()> {
    let celebrating = state.celebrating.clone();
    Callback::from(move |()| celebrating.set(false))
}
