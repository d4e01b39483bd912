use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::checklist::{Checklist, ChecklistItem};
use crate::components::progress_bar::ProgressBar;
use crate::components::prompt_card::PromptCard;
use crate::i18n::{t, tr};
use dungeon_copilot_engine::SectionId;
use std::collections::BTreeMap;
use yew::prelude::*;

pub fn render_stage(state: &AppState, handlers: &AppHandlers, number: u8) -> Html {
    let Some(index) = SectionId::Stage(number).stage_index() else {
        return Html::default();
    };
    let Some(spec) = state.course.stage(index) else {
        return Html::default();
    };

    let flags = state.progress.checklist().items(index);
    let items: Vec<ChecklistItem> = spec
        .checklist
        .iter()
        .enumerate()
        .map(|(item, label)| ChecklistItem {
            label: AttrValue::from(label.clone()),
            checked: flags.get(item).copied().unwrap_or(false),
        })
        .collect();

    let advance_open = state.progress.checklist().can_advance(index);
    let is_final = index + 1 == state.course.stage_count();

    let stage_label = {
        let number = number.to_string();
        let mut args = BTreeMap::new();
        args.insert("n", number.as_str());
        tr("map.stage_label", Some(&args))
    };

    let on_toggle = {
        let toggle_item = handlers.toggle_item.clone();
        Callback::from(move |item: usize| toggle_item.emit((index, item)))
    };
    let on_back = {
        let navigate = handlers.navigate.clone();
        Callback::from(move |_| navigate.emit(SectionId::QuestMap))
    };
    let on_next = {
        let navigate_next = handlers.navigate_next.clone();
        Callback::from(move |_| navigate_next.emit(()))
    };

    let next_label = if is_final {
        t("stage.next_final")
    } else {
        t("stage.next")
    };

    let prompts = spec.prompts.iter().map(|prompt| {
        html! {
            <PromptCard
                label={AttrValue::from(prompt.label.clone())}
                text={AttrValue::from(prompt.text.clone())}
            />
        }
    });

    html! {
        <section id={spec.id.clone()} class="section active stage">
            <header class="stage-header">
                <span class="stage-number">{ stage_label }</span>
                <h2>{ spec.title.clone() }</h2>
                <p class="stage-subtitle">{ spec.subtitle.clone() }</p>
            </header>

            <ProgressBar percent={state.progress.completion_percent()} />

            <div class="stage-objective">
                <h3>{ t("stage.objective") }</h3>
                <p>{ spec.objective.clone() }</p>
            </div>

            { if spec.prompts.is_empty() {
                Html::default()
            } else {
                html! {
                    <div class="stage-prompts">
                        <h3>{ t("stage.prompts") }</h3>
                        { for prompts }
                    </div>
                }
            } }

            <Checklist items={items} on_toggle={on_toggle} />

            <div class="stage-nav">
                <button class="btn-back" onclick={on_back}>
                    { t("stage.back_to_map") }
                </button>
                <button
                    class={classes!("btn-next", (!advance_open).then_some("locked"))}
                    disabled={!advance_open}
                    title={(!advance_open).then(|| t("stage.next_locked"))}
                    onclick={on_next}
                >
                    { next_label }
                </button>
            </div>
        </section>
    }
}
