mod checklist;
mod navigation;
mod reset;

use crate::app::state::AppState;
use dungeon_copilot_engine::{SectionId, Transition};
use yew::prelude::*;

pub use checklist::build_toggle_item;
pub use navigation::{
    build_dismiss_notice, build_escape_to_map, build_finish_celebration, build_navigate,
    build_navigate_next, build_route_entered,
};
pub use reset::{build_close_reset, build_confirm_reset, build_open_reset};

#[derive(Clone)]
pub struct AppHandlers {
    pub navigate: Callback<SectionId>,
    pub navigate_next: Callback<()>,
    pub route_entered: Callback<Transition>,
    pub escape_to_map: Callback<()>,
    pub toggle_item: Callback<(usize, usize)>,
    pub dismiss_notice: Callback<()>,
    pub finish_celebration: Callback<()>,
    pub open_reset: Callback<()>,
    pub close_reset: Callback<()>,
    pub confirm_reset: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            navigate: build_navigate(state),
            navigate_next: build_navigate_next(state),
            route_entered: build_route_entered(state),
            escape_to_map: build_escape_to_map(state),
            toggle_item: build_toggle_item(state),
            dismiss_notice: build_dismiss_notice(state),
            finish_celebration: build_finish_celebration(state),
            open_reset: build_open_reset(state),
            close_reset: build_close_reset(state),
            confirm_reset: build_confirm_reset(state),
        }
    }
}
