use crate::app::state::AppState;
use crate::storage::BrowserStorage;
use dungeon_copilot_engine::{ProgressStorage, encode_snapshot};
use yew::prelude::*;

/// Toggle one checklist item and write the whole snapshot through. Lock
/// states are derived at render time, so flipping a flag is all the
/// recomputation needed here.
pub fn build_toggle_item(state: &AppState) -> Callback<(usize, usize)> {
    let progress_handle = state.progress.clone();
    Callback::from(move |(stage, item): (usize, usize)| {
        let mut next = (*progress_handle).clone();
        match next.toggle_item(stage, item) {
            Ok(_) => {
                if let Err(err) = BrowserStorage.save_checkboxes(&encode_snapshot(next.checklist()))
                {
                    log::warn!("could not save checklist state: {err}");
                }
                progress_handle.set(next);
            }
            Err(err) => log::warn!("ignored checklist toggle: {err}"),
        }
    })
}
