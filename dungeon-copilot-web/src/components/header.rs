use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_open_reset: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let open_reset = {
        let cb = p.on_open_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <header role="banner">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="header-content">
                <div class="header-left">
                    <h1 class="app-title">{ t("app.title") }</h1>
                    <p class="app-tagline">{ t("app.tagline") }</p>
                </div>
                <div class="header-right">
                    <button id="reset-open-btn" class="btn-reset" onclick={open_reset}>
                        { t("reset.button") }
                    </button>
                </div>
            </div>
        </header>
    }
}
