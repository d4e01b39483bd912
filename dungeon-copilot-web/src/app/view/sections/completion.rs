use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::i18n::t;
use dungeon_copilot_engine::SectionId;
use yew::prelude::*;

pub fn render_completion(_state: &AppState, handlers: &AppHandlers) -> Html {
    let on_back = {
        let navigate = handlers.navigate.clone();
        Callback::from(move |_| navigate.emit(SectionId::QuestMap))
    };
    let on_reset = {
        let open_reset = handlers.open_reset.clone();
        Callback::from(move |_| open_reset.emit(()))
    };

    html! {
        <section id="completion" class="section active completion">
            <h2>{ t("completion.heading") }</h2>
            <p>{ t("completion.body") }</p>
            <div class="completion-actions">
                <button class="btn-back" onclick={on_back}>
                    { t("completion.back_to_map") }
                </button>
                <button class="btn-reset" onclick={on_reset}>
                    { t("reset.button") }
                </button>
            </div>
        </section>
    }
}
