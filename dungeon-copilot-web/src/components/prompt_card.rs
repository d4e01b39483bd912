use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    pub text: AttrValue,
}

/// Write the prompt via the async clipboard API, falling back to the hidden
/// textarea + `execCommand` path when the API rejects.
#[cfg(target_arch = "wasm32")]
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn copy_to_clipboard(text: &str) -> bool {
    let clipboard = crate::dom::window().navigator().clipboard();
    let promise = clipboard.write_text(text);
    if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
        return true;
    }
    fallback_copy(text)
}

#[cfg(target_arch = "wasm32")]
fn fallback_copy(text: &str) -> bool {
    use wasm_bindgen::JsCast;

    let document = crate::dom::document();
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(node) = document.create_element("textarea") else {
        return false;
    };
    let Ok(textarea) = node.dyn_into::<web_sys::HtmlTextAreaElement>() else {
        return false;
    };
    textarea.set_value(text);
    let _ = textarea.set_attribute("style", "position:fixed;left:-999999px;top:0;");
    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();
    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);
    let _ = body.remove_child(&textarea);
    if !copied {
        crate::dom::console_error("Fallback copy failed");
    }
    copied
}

#[function_component(PromptCard)]
pub fn prompt_card(p: &Props) -> Html {
    let copied = use_state(|| false);

    let onclick = {
        let text = p.text.clone();
        let copied = copied.clone();
        Callback::from(move |_| {
            #[cfg(target_arch = "wasm32")]
            {
                let text = text.to_string();
                let copied = copied.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    if copy_to_clipboard(&text).await {
                        crate::a11y::announce(&t("copy.announce"));
                    }
                    // The indicator flips either way and reverts after two
                    // seconds; re-clicks simply restart the timer race.
                    copied.set(true);
                    let _ = crate::dom::sleep_ms(2000).await;
                    copied.set(false);
                });
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = &text;
                copied.set(true);
            }
        })
    };

    let button_label = if *copied {
        t("copy.copied")
    } else {
        t("copy.button")
    };

    html! {
        <div class="prompt-card">
            <span class="prompt-label">{ p.label.clone() }</span>
            <div class="prompt-box">
                <code>{ p.text.clone() }</code>
            </div>
            <button
                class={classes!("btn-copy", (*copied).then_some("copied"))}
                {onclick}
            >
                { button_label }
            </button>
        </div>
    }
}
