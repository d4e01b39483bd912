use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::progress_bar::ProgressBar;
use crate::components::quest_map::{QuestMap, QuestNode};
use crate::i18n::t;
use dungeon_copilot_engine::{LockState, SectionId};
use yew::prelude::*;

pub fn render_quest_map(state: &AppState, handlers: &AppHandlers) -> Html {
    let locks = state.progress.lock_states();
    let nodes: Vec<QuestNode> = state
        .course
        .stages
        .iter()
        .enumerate()
        .map(|(index, stage)| QuestNode {
            number: u8::try_from(index + 1).unwrap_or(u8::MAX),
            title: AttrValue::from(stage.title.clone()),
            state: locks.get(index).copied().unwrap_or(LockState::Locked),
        })
        .collect();

    let on_select = {
        let navigate = handlers.navigate.clone();
        Callback::from(move |number: u8| navigate.emit(SectionId::Stage(number)))
    };

    html! {
        <section id="quest-map" class="section active quest-map">
            <h2>{ t("map.title") }</h2>
            <p class="map-subtitle">{ t("map.subtitle") }</p>
            <ProgressBar percent={state.progress.completion_percent()} />
            <QuestMap {nodes} {on_select} />
        </section>
    }
}
