//! Accessibility helpers: focus styling and screen-reader announcements.

/// Critical a11y CSS injected at the top of `<main>`: a visible focus ring
/// and the `.sr-only` utility the live region and skip link use.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    concat!(
        ":focus{outline:3px solid #8A83FF;outline-offset:2px}",
        " .sr-only{position:absolute;width:1px;height:1px;margin:-1px;",
        "overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
    )
}

/// Push a message into the `#live-status` polite region so assistive
/// technology hears about it: a locked door refusing entry, a prompt
/// landing on the clipboard. A missing region drops the message.
pub fn announce(msg: &str) {
    if let Some(region) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("live-status"))
    {
        region.set_text_content(Some(msg));
    }
}
