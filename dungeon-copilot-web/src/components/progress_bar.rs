use crate::i18n::{fmt_pct, t, tr};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Share of checked items across the whole course, 0..=100.
    pub percent: f64,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[function_component(ProgressBar)]
pub fn progress_bar(p: &Props) -> Html {
    let clamped = p.percent.clamp(0.0, 100.0);
    let width = format!("width:{clamped:.0}%");
    let now = format!("{clamped:.0}");
    let label = {
        let pct = fmt_pct(clamped.round() as u8);
        let mut args = BTreeMap::new();
        args.insert("pct", pct.as_str());
        tr("progress.percent", Some(&args))
    };

    html! {
        <div class="quest-progress">
            <div
                class="progress-bar"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={now}
                aria-label={t("progress.label")}
            >
                <div class="progress" style={width}></div>
            </div>
            <span class="progress-label">{ label }</span>
        </div>
    }
}
