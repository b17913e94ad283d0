use crate::components::button::Button;
use crate::i18n;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Zero-based index of the gate being answered.
    pub stage: usize,
    pub total: usize,
    /// Whether the previous attempt for this gate was wrong.
    pub error: bool,
    pub on_submit: Callback<String>,
}

/// One password prompt. Gates open strictly in order, so this page only ever
/// shows the first locked one.
#[function_component(GatePage)]
pub fn gate_page(p: &Props) -> Html {
    let answer = use_state(String::new);

    let oninput = {
        let answer = answer.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                answer.set(input.value());
            }
        })
    };

    let onsubmit = {
        let answer = answer.clone();
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit((*answer).clone());
            answer.set(String::new());
        })
    };

    let mut args = BTreeMap::new();
    args.insert("current", (p.stage + 1).to_string());
    args.insert("total", p.total.to_string());

    html! {
        <section class="gate">
            <h2>{ i18n::t("gate.title") }</h2>
            <p class="muted">{ i18n::tf("gate.progress", &args) }</p>
            <form {onsubmit}>
                <label>
                    <span>{ i18n::t("gate.prompt") }</span>
                    <input
                        type="password"
                        value={(*answer).clone()}
                        {oninput}
                        placeholder={i18n::t("gate.placeholder")}
                        autocomplete="off"
                        data-testid="gate-input"
                    />
                </label>
                <Button label={i18n::t("gate.submit")} />
            </form>
            if p.error {
                <p class="error" role="alert">{ i18n::t("gate.error") }</p>
            }
        </section>
    }
}
