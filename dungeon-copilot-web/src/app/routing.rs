#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(any(target_arch = "wasm32", test))]
use dungeon_copilot_engine::{ProgressionState, SectionId, can_navigate_to};
#[cfg(target_arch = "wasm32")]
use dungeon_copilot_engine::Transition;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_section(section: SectionId, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_section(section);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn next_section_for_route(progress: &ProgressionState, route: Option<Route>) -> Option<SectionId> {
    let target = route.and_then(|route| route.to_section())?;
    if target == progress.active() {
        return None;
    }

    is_route_transition_allowed(progress, target).then_some(target)
}

/// Whether a route-driven section change (back/forward buttons, hand-typed
/// URLs) is admitted. The same lock rules apply as for in-page navigation;
/// the completion route additionally requires the final stage to be done.
#[cfg(any(target_arch = "wasm32", test))]
fn is_route_transition_allowed(progress: &ProgressionState, target: SectionId) -> bool {
    match target {
        SectionId::Stage(_) => can_navigate_to(target, &progress.lock_states()),
        SectionId::Completion => {
            let stages = progress.checklist().stage_count();
            stages > 0 && progress.checklist().stage_complete(stages - 1)
        }
        SectionId::Landing | SectionId::QuestMap => true,
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_section(
    progress: &UseStateHandle<ProgressionState>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let progress = progress.clone();
    use_effect_with((progress, active_route), move |(progress, current_route)| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_section(progress.active(), current_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_section_with_route(
    progress: &UseStateHandle<ProgressionState>,
    route: Option<Route>,
    on_enter: Callback<Transition>,
) {
    let progress = progress.clone();
    use_effect_with(route, move |route| {
        if let Some(target) = next_section_for_route(&progress, route.clone()) {
            let mut next = (*progress).clone();
            if let Ok(transition) = next.navigate(target) {
                progress.set(next);
                on_enter.emit(transition);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon_copilot_engine::CourseData;

    fn course() -> CourseData {
        CourseData::from_json(
            r#"{
                "stages": [
                    { "id": "stage1", "title": "One", "checklist": ["a"] },
                    { "id": "stage2", "title": "Two", "checklist": ["b"] }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn next_route_for_section_skips_when_unchanged() {
        let route = Route::from_section(SectionId::QuestMap);
        assert!(next_route_for_section(SectionId::QuestMap, Some(&route)).is_none());
        assert_eq!(
            next_route_for_section(SectionId::QuestMap, None),
            Some(Route::QuestMap)
        );
        assert_eq!(
            next_route_for_section(SectionId::Landing, Some(&route)),
            Some(Route::Home)
        );
    }

    #[test]
    fn route_driven_navigation_respects_locks() {
        let progress = ProgressionState::new(&course());
        assert_eq!(
            next_section_for_route(&progress, Some(Route::QuestMap)),
            Some(SectionId::QuestMap)
        );
        assert_eq!(
            next_section_for_route(&progress, Some(Route::Stage { n: 1 })),
            Some(SectionId::Stage(1))
        );
        // A hand-typed /stage/2 bounces off the lock.
        assert_eq!(
            next_section_for_route(&progress, Some(Route::Stage { n: 2 })),
            None
        );
        assert_eq!(
            next_section_for_route(&progress, Some(Route::Completion)),
            None
        );
        assert_eq!(next_section_for_route(&progress, Some(Route::NotFound)), None);
        assert_eq!(next_section_for_route(&progress, None), None);
    }

    #[test]
    fn route_driven_navigation_skips_the_active_section() {
        let progress = ProgressionState::new(&course());
        assert_eq!(next_section_for_route(&progress, Some(Route::Home)), None);
    }

    #[test]
    fn completion_route_needs_the_final_stage_done() {
        let mut progress = ProgressionState::new(&course());
        progress.toggle_item(0, 0).unwrap();
        progress.toggle_item(1, 0).unwrap();
        assert_eq!(
            next_section_for_route(&progress, Some(Route::Completion)),
            Some(SectionId::Completion)
        );
        // An empty course never admits the completion route.
        let empty = ProgressionState::new(&CourseData::empty());
        assert!(!is_route_transition_allowed(&empty, SectionId::Completion));
    }
}
