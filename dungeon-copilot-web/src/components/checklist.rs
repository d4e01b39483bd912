use crate::i18n::t;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// One task row: label plus its checked flag.
#[derive(Clone, PartialEq)]
pub struct ChecklistItem {
    pub label: AttrValue,
    pub checked: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<ChecklistItem>,
    /// Index of the toggled item within this stage.
    pub on_toggle: Callback<usize>,
}

#[function_component(Checklist)]
pub fn checklist(p: &Props) -> Html {
    let rows = p.items.iter().enumerate().map(|(index, item)| {
        let onchange = {
            let on_toggle = p.on_toggle.clone();
            Callback::from(move |e: Event| {
                #[cfg(target_arch = "wasm32")]
                {
                    if e.target_dyn_into::<HtmlInputElement>().is_some() {
                        on_toggle.emit(index);
                    }
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let _ = &e;
                    on_toggle.emit(index);
                }
            })
        };
        html! {
            <li class={classes!("checklist-item", item.checked.then_some("done"))}>
                <label>
                    <input
                        type="checkbox"
                        checked={item.checked}
                        {onchange}
                    />
                    <span>{ item.label.clone() }</span>
                </label>
            </li>
        }
    });

    html! {
        <div class="completion-checklist">
            <h3>{ t("stage.checklist") }</h3>
            <ul>
                { for rows }
            </ul>
        </div>
    }
}
