use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::i18n::t;
use dungeon_copilot_engine::SectionId;
use yew::prelude::*;

pub fn render_landing(_state: &AppState, handlers: &AppHandlers) -> Html {
    let on_begin = {
        let navigate = handlers.navigate.clone();
        Callback::from(move |_| navigate.emit(SectionId::QuestMap))
    };

    html! {
        <section id="landing" class="section active landing">
            <h2>{ t("landing.heading") }</h2>
            <p class="landing-intro">{ t("landing.intro") }</p>
            <p class="landing-hint">{ t("landing.hint") }</p>
            <button class="btn-begin" onclick={on_begin}>
                { t("landing.begin") }
            </button>
        </section>
    }
}
