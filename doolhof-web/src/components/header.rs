use crate::i18n;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub current_language: String,
    pub high_contrast: bool,
    pub on_nav_game: Callback<()>,
    pub on_nav_logbook: Callback<()>,
    pub on_lang_change: Callback<String>,
    pub on_toggle_hc: Callback<bool>,
}

/// Top bar: title, the two section links, and the settings controls.
#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let on_nav_game = {
        let cb = p.on_nav_game.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_nav_logbook = {
        let cb = p.on_nav_logbook.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_lang_change = {
        let cb = p.on_lang_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            {
                cb.emit(select.value());
            }
        })
    };
    let on_toggle_hc = {
        let cb = p.on_toggle_hc.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                cb.emit(input.checked());
            }
        })
    };

    html! {
        <header class="shell-header">
            <h1 class="shell-title">{ i18n::t("app.title") }</h1>
            <nav class="shell-nav" aria-label="sections">
                <button onclick={on_nav_game}>{ i18n::t("nav.maze") }</button>
                <button onclick={on_nav_logbook}>{ i18n::t("nav.logbook") }</button>
            </nav>
            <div class="shell-settings">
                <label class="setting">
                    <span>{ i18n::t("settings.language") }</span>
                    <select onchange={on_lang_change} data-testid="lang-select">
                        {
                            for i18n::locales().iter().map(|meta| html! {
                                <option
                                    value={meta.code}
                                    selected={meta.code == p.current_language}
                                >
                                    { meta.name }
                                </option>
                            })
                        }
                    </select>
                </label>
                <label class="setting">
                    <span>{ i18n::t("settings.contrast") }</span>
                    <input
                        type="checkbox"
                        checked={p.high_contrast}
                        onchange={on_toggle_hc}
                        data-testid="hc-toggle"
                    />
                </label>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(current_language: &str, high_contrast: bool) -> String {
        let props = Props {
            current_language: current_language.to_string(),
            high_contrast,
            on_nav_game: Callback::noop(),
            on_nav_logbook: Callback::noop(),
            on_lang_change: Callback::noop(),
            on_toggle_hc: Callback::noop(),
        };
        block_on(LocalServerRenderer::<Header>::with_props(props).render())
    }

    #[test]
    fn header_lists_every_locale() {
        let html = render("nl", false);
        for meta in i18n::locales() {
            assert!(html.contains(meta.name), "missing locale {}", meta.code);
        }
    }

    #[test]
    fn contrast_checkbox_reflects_the_flag() {
        assert!(render("nl", true).contains("checked"));
        assert!(!render("nl", false).contains("checked"));
    }
}
