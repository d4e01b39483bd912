mod handlers;
mod sections;

pub use handlers::{AppHandlers, build_escape_to_map, build_route_entered};

use crate::app::state::AppState;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let main_view = sections::render_main_view(state, &handlers);

    html! {
        <>
            <crate::components::header::Header on_open_reset={handlers.open_reset.clone()} />
            <main id="main" role="main">
                <style>{ crate::a11y::visible_focus_css() }</style>
                <div id="live-status" class="sr-only" aria-live="polite"></div>
                <crate::components::notice::Notice
                    message={(*state.notice).clone()}
                    on_dismiss={handlers.dismiss_notice.clone()}
                />
                <crate::components::reset_dialog::ResetDialog
                    open={*state.show_reset}
                    on_confirm={handlers.confirm_reset.clone()}
                    on_cancel={handlers.close_reset.clone()}
                />
                <crate::components::confetti::Confetti
                    active={*state.celebrating}
                    on_finished={handlers.finish_celebration.clone()}
                />
                { main_view }
            </main>
            <crate::components::footer::Footer />
        </>
    }
}
