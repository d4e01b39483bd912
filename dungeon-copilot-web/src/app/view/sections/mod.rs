mod completion;
mod landing;
mod quest_map;
mod stage;

use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use dungeon_copilot_engine::SectionId;
use yew::prelude::*;

pub use completion::render_completion;
pub use landing::render_landing;
pub use quest_map::render_quest_map;
pub use stage::render_stage;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers) -> Html {
    if !*state.boot_ready {
        return html! {
            <div class="boot" data-testid="boot-screen" aria-busy="true"></div>
        };
    }

    match state.progress.active() {
        SectionId::Landing => render_landing(state, handlers),
        SectionId::QuestMap => render_quest_map(state, handlers),
        SectionId::Stage(n) => render_stage(state, handlers, n),
        SectionId::Completion => render_completion(state, handlers),
    }
}
