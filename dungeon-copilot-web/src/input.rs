//! Keyboard shortcuts for moving around the dungeon.

use dungeon_copilot_engine::SectionId;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Where the Escape key leads from a section, if anywhere. The landing page
/// has nothing to back out to; everywhere else Escape returns to the map.
#[must_use]
pub fn escape_target(active: SectionId) -> Option<SectionId> {
    match active {
        SectionId::Landing => None,
        _ => Some(SectionId::QuestMap),
    }
}

/// Listen for Escape on the whole document for as long as the app is
/// mounted, forwarding presses to the given callback.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_escape_nav(on_escape: Callback<()>) {
    use_effect_with((), move |()| {
        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                if event.key() == "Escape" {
                    on_escape.emit(());
                }
            },
        );
        let document = crate::dom::document();
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        move || {
            let _ = document
                .remove_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            drop(closure);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_leads_to_the_map_except_from_landing() {
        assert_eq!(escape_target(SectionId::Landing), None);
        assert_eq!(escape_target(SectionId::QuestMap), Some(SectionId::QuestMap));
        assert_eq!(escape_target(SectionId::Stage(3)), Some(SectionId::QuestMap));
        assert_eq!(
            escape_target(SectionId::Completion),
            Some(SectionId::QuestMap)
        );
    }
}
