//! Thin wrappers over the browser globals the walkthrough touches.

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Storage, Window};

/// The global `window`.
///
/// # Panics
/// Panics outside a browser context.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// The current document.
///
/// # Panics
/// Panics when the window carries no document.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Render a thrown JS value as text for log lines.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Jump the viewport back to the top, as every section change does.
pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

/// `setTimeout` as a future. Timers are fire-and-forget: nothing cancels
/// one once scheduled, so overlapping sleeps simply race.
///
/// # Errors
/// Returns an error if the underlying promise rejects.
///
/// # Panics
/// Panics if no browser `window` is available.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let promise = Promise::new(&mut |resolve, _reject| {
        let fire = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::UNDEFINED);
        });
        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            fire.unchecked_ref(),
            duration_ms,
        );
    });
    JsFuture::from(promise).await?;
    Ok(())
}

/// The browser `localStorage` handle.
///
/// # Errors
/// Returns an error when the storage area is missing or access throws
/// (private browsing, disabled cookies).
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}
