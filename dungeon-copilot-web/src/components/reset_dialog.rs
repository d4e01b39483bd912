use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Confirmation gate in front of the destructive reset. Backdrop clicks and
/// Escape both cancel; only the explicit confirm button wipes progress.
#[function_component(ResetDialog)]
pub fn reset_dialog(p: &Props) -> Html {
    if !p.open {
        return Html::default();
    }

    let on_cancel = {
        let cb = p.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_confirm = {
        let cb = p.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_keydown = {
        let cb = p.on_cancel.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let stop_bubble = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_cancel.clone()}>
            <div
                class="modal"
                role="alertdialog"
                aria-modal="true"
                aria-labelledby="reset-dialog-title"
                aria-describedby="reset-dialog-body"
                onkeydown={on_keydown}
                onclick={stop_bubble}
            >
                <h2 id="reset-dialog-title">{ t("reset.title") }</h2>
                <p id="reset-dialog-body">{ t("reset.body") }</p>
                <div class="modal-actions">
                    <button class="btn-danger" onclick={on_confirm}>
                        { t("reset.confirm") }
                    </button>
                    <button class="btn-secondary" onclick={on_cancel}>
                        { t("reset.cancel") }
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(open: bool) -> String {
        crate::i18n::set_lang("en");
        let props = Props {
            open,
            on_confirm: Callback::noop(),
            on_cancel: Callback::noop(),
        };
        block_on(LocalServerRenderer::<ResetDialog>::with_props(props).render())
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        assert!(!render(false).contains("modal"));
    }

    #[test]
    fn open_dialog_offers_confirm_and_cancel() {
        let html = render(true);
        assert!(html.contains("alertdialog"));
        assert!(html.contains("Reset everything"));
        assert!(html.contains("Keep my progress"));
    }
}
