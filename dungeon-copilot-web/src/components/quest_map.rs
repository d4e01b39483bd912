use crate::i18n::{t, tr};
use dungeon_copilot_engine::LockState;
use std::collections::BTreeMap;
use yew::prelude::*;

/// One node on the quest map.
#[derive(Clone, PartialEq)]
pub struct QuestNode {
    pub number: u8,
    pub title: AttrValue,
    pub state: LockState,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub nodes: Vec<QuestNode>,
    /// Clicked stage number. Locked nodes still emit; the denial comes back
    /// as a notice rather than a disabled control.
    pub on_select: Callback<u8>,
}

fn state_label(state: LockState) -> String {
    match state {
        LockState::Locked => t("map.state.locked"),
        LockState::Unlocked => t("map.state.unlocked"),
        LockState::Completed => t("map.state.completed"),
    }
}

#[function_component(QuestMap)]
pub fn quest_map(p: &Props) -> Html {
    let nodes = p.nodes.iter().map(|node| {
        let onclick = {
            let on_select = p.on_select.clone();
            let number = node.number;
            Callback::from(move |_| on_select.emit(number))
        };
        let stage_label = {
            let number = node.number.to_string();
            let mut args = BTreeMap::new();
            args.insert("n", number.as_str());
            tr("map.stage_label", Some(&args))
        };
        let aria = format!("{stage_label}: {} ({})", node.title, state_label(node.state));
        html! {
            <li>
                <button
                    class={classes!("quest-node", node.state.css_class())}
                    data-stage={node.number.to_string()}
                    aria-label={aria}
                    {onclick}
                >
                    <span class="quest-node-number">{ node.number }</span>
                    <span class="quest-node-title">{ node.title.clone() }</span>
                    <span class="quest-node-state">{ state_label(node.state) }</span>
                </button>
            </li>
        }
    });

    html! {
        <ol class="quest-nodes">
            { for nodes }
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;
    use yew::LocalServerRenderer;

    fn nodes() -> Vec<QuestNode> {
        vec![
            QuestNode {
                number: 1,
                title: AttrValue::from("The Summoning Circle"),
                state: LockState::Unlocked,
            },
            QuestNode {
                number: 2,
                title: AttrValue::from("The Scribe's Chamber"),
                state: LockState::Locked,
            },
        ]
    }

    #[test]
    fn nodes_render_with_lock_classes() {
        crate::i18n::set_lang("en");
        let props = Props {
            nodes: nodes(),
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<QuestMap>::with_props(props).render());
        assert!(html.contains("unlocked"));
        assert!(html.contains("locked"));
        assert!(html.contains("data-stage=\"2\""));
    }

    #[test]
    fn select_callback_carries_the_stage_number() {
        let captured = Rc::new(RefCell::new(Vec::new()));
        let captured_ref = captured.clone();
        let on_select = Callback::from(move |n: u8| captured_ref.borrow_mut().push(n));
        on_select.emit(2);
        assert_eq!(*captured.borrow(), vec![2]);
    }
}
