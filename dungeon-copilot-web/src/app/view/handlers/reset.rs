use crate::app::state::AppState;
use crate::storage::BrowserStorage;
use dungeon_copilot_engine::{ProgressStorage, SectionId};
use yew::prelude::*;

pub fn build_open_reset(state: &AppState) -> Callback<()> {
    let show_reset = state.show_reset.clone();
    Callback::from(move |()| show_reset.set(true))
}

pub fn build_close_reset(state: &AppState) -> Callback<()> {
    let show_reset = state.show_reset.clone();
    Callback::from(move |()| show_reset.set(false))
}

/// Confirmed reset: wipe the persisted keys, uncheck everything, and land
/// back on the landing page with all transient chrome cleared.
pub fn build_confirm_reset(state: &AppState) -> Callback<()> {
    let progress_handle = state.progress.clone();
    let show_reset = state.show_reset.clone();
    let celebrating = state.celebrating.clone();
    let notice_handle = state.notice.clone();
    Callback::from(move |()| {
        let mut next = (*progress_handle).clone();
        next.reset();
        if let Err(err) = BrowserStorage.clear() {
            log::warn!("could not clear saved progress: {err}");
        }
        // The landing page counts as the freshly shown section.
        if let Err(err) = BrowserStorage.save_section(SectionId::Landing) {
            log::warn!("could not save progress: {err}");
        }
        progress_handle.set(next);
        show_reset.set(false);
        celebrating.set(false);
        notice_handle.set(None);
    })
}
