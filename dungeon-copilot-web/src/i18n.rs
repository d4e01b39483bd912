//! User-facing strings.
//!
//! One shipped locale for now; every string still routes through the
//! bundle table so more locales can land without touching call sites.

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Intl, Object};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const LOCALE_TABLE: &[(&str, &str)] = &[("en", include_str!("../i18n/en.json"))];
const DEFAULT_LANG: &str = "en";
const LOCALE_KEY: &str = "dungeonCopilot_locale";

struct Bundle {
    lang: String,
    entries: BTreeMap<String, String>,
}

/// Walk the nested locale JSON into dotted keys (`reset.confirm`).
fn flatten(prefix: &str, value: &Value, out: &mut BTreeMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        _ => {}
    }
}

fn known(lang: &str) -> bool {
    LOCALE_TABLE.iter().any(|(code, _)| *code == lang)
}

fn load_bundle(lang: &str) -> Bundle {
    let (code, raw) = LOCALE_TABLE
        .iter()
        .find(|(code, _)| *code == lang)
        .unwrap_or(&LOCALE_TABLE[0]);
    let mut entries = BTreeMap::new();
    if let Ok(value) = serde_json::from_str::<Value>(raw) {
        flatten("", &value, &mut entries);
    }
    Bundle {
        lang: (*code).to_string(),
        entries,
    }
}

fn saved_lang() -> String {
    #[cfg(not(test))]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LOCALE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }
    #[cfg(test)]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<Bundle> = RefCell::new(load_bundle(&saved_lang()));
}

/// Switch the active locale. Unknown codes are ignored. On the web the
/// choice lands on `<html lang>` and in localStorage for the next visit.
pub fn set_lang(lang: &str) {
    if !known(lang) {
        return;
    }
    CURRENT.with(|cell| cell.replace(load_bundle(lang)));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = root.set_attribute("lang", lang);
        }
        if let Some(storage) = web_sys::window().and_then(|win| win.local_storage().ok().flatten())
        {
            let _ = storage.set_item(LOCALE_KEY, lang);
        }
    }
}

#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|cell| cell.borrow().lang.clone())
}

fn interpolate(template: &str, args: &BTreeMap<&str, &str>) -> String {
    let mut text = template.to_string();
    for (name, value) in args {
        // Both {name} and {{name}} placeholder spellings occur in bundles.
        text = text.replace(&format!("{{{{{name}}}}}"), value);
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}

/// Translate a dotted key; an unknown key renders as itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate with placeholder substitution.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        match (bundle.entries.get(key), args) {
            (Some(template), Some(args)) => interpolate(template, args),
            (Some(template), None) => template.clone(),
            (None, _) => key.to_string(),
        }
    })
}

/// Format a percentage for display.
#[must_use]
pub fn fmt_pct(pct: u8) -> String {
    fmt_number(pct.into())
}

/// Format a number in the current locale via `Intl`.
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::new();
        locales.push(&JsValue::from_str(&current_lang()));
        let nf = Intl::NumberFormat::new(&locales, &Object::new());
        let format_fn: Function = nf.format();
        format_fn
            .call1(&nf, &JsValue::from_f64(num))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| num.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        num.to_string()
    }
}
