//! Minimal locale bundle: Dutch-first product with an English fallback.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        code: "nl",
        name: "Nederlands",
    },
    LocaleMeta {
        code: "en",
        name: "English",
    },
];

const LOCALE_TABLE: &[(&str, &str)] = &[
    ("nl", include_str!("../i18n/nl.json")),
    ("en", include_str!("../i18n/en.json")),
];

const DEFAULT_LANG: &str = "nl";
const LOCALE_STORAGE_KEY: &str = "doolhof.locale";

pub struct I18nBundle {
    pub lang: String,
    translations: Value,
    fallback: Value,
}

fn load_translations(lang: &str) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

fn fallback_bundle() -> I18nBundle {
    let fallback = load_translations(DEFAULT_LANG).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

fn saved_lang() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial).unwrap_or_else(fallback_bundle)
    });
}

/// Set the current language.
///
/// Changes the active bundle, updates the `<html lang>` attribute, and
/// persists the choice to localStorage for future sessions.
pub fn set_lang(lang: &str) {
    if let Some(b) = build_bundle(lang) {
        CURRENT.with(|cell| cell.replace(b));
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let _ = el.set_attribute("lang", lang);
            }
            if let Some(storage) =
                web_sys::window().and_then(|win| win.local_storage().ok().flatten())
            {
                let _ = storage.set_item(LOCALE_STORAGE_KEY, lang);
            }
        }
    }
}

/// Get the current active language code.
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|c| c.borrow().lang.clone())
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        current = current.get(k)?;
    }
    Some(current)
}

fn interpolate(text: &str, args: &BTreeMap<&str, String>) -> String {
    let mut out = text.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

fn lookup(bundle: &I18nBundle, key: &str) -> Option<String> {
    get_nested_value(&bundle.translations, key)
        .or_else(|| get_nested_value(&bundle.fallback, key))
        .and_then(Value::as_str)
        .map(ToString::to_string)
}

/// Translate a dotted key; unknown keys render as the key itself so missing
/// strings stay visible.
#[must_use]
pub fn t(key: &str) -> String {
    CURRENT.with(|cell| lookup(&cell.borrow(), key).unwrap_or_else(|| key.to_string()))
}

/// Translate a dotted key and substitute `{name}` placeholders.
#[must_use]
pub fn tf(key: &str, args: &BTreeMap<&str, String>) -> String {
    interpolate(&t(key), args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_parses_and_covers_the_default_keys() {
        let default: Value = serde_json::from_str(LOCALE_TABLE[0].1).unwrap();
        for (code, data) in LOCALE_TABLE {
            let parsed: Value = serde_json::from_str(data)
                .unwrap_or_else(|err| panic!("locale {code} is not valid JSON: {err}"));
            assert!(parsed.is_object(), "locale {code} should be an object");
            assert_keys_match(code, "", &default, &parsed);
        }
    }

    fn assert_keys_match(code: &str, path: &str, expected: &Value, actual: &Value) {
        let (Some(expected), Some(actual)) = (expected.as_object(), actual.as_object()) else {
            return;
        };
        for (key, value) in expected {
            let child = actual
                .get(key)
                .unwrap_or_else(|| panic!("locale {code} misses key {path}{key}"));
            assert_keys_match(code, &format!("{path}{key}."), value, child);
        }
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        assert_eq!(t("does.not.exist"), "does.not.exist");
    }

    #[test]
    fn known_keys_resolve() {
        assert_ne!(t("app.title"), "app.title");
    }

    #[test]
    fn placeholders_interpolate() {
        let mut args = BTreeMap::new();
        args.insert("current", "1".to_string());
        args.insert("total", "2".to_string());
        let text = tf("gate.progress", &args);
        assert!(text.contains('1') && text.contains('2'), "got: {text}");
    }
}
