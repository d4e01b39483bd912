use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Current denial text; `None` hides the banner.
    pub message: Option<AttrValue>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Notice)]
pub fn notice(p: &Props) -> Html {
    let Some(message) = p.message.clone() else {
        return Html::default();
    };

    let dismiss = {
        let cb = p.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div class="notice" role="alert">
            <span class="notice-icon" aria-hidden="true">{ "\u{1F512}" }</span>
            <span class="notice-text">{ message }</span>
            <button class="notice-dismiss" onclick={dismiss}>
                { t("notice.dismiss") }
            </button>
        </div>
    }
}
