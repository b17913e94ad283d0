use crate::app::state::{AppendFailure, AppendStatus, TripDraft};
use crate::components::button::Button;
use crate::game::TripError;
use crate::i18n;
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub draft: TripDraft,
    pub destinations: Vec<String>,
    pub status: AppendStatus,
    pub on_change: Callback<TripDraft>,
    pub on_submit: Callback<()>,
}

fn status_line(status: &AppendStatus) -> Option<(String, bool)> {
    match status {
        AppendStatus::Idle => None,
        AppendStatus::Busy => Some((i18n::t("log.busy"), false)),
        AppendStatus::Saved(sheet) => {
            let mut args = BTreeMap::new();
            args.insert("sheet", sheet.clone());
            Some((i18n::tf("log.saved", &args), false))
        }
        AppendStatus::Failed(failure) => Some((failure_line(failure), true)),
    }
}

fn failure_line(failure: &AppendFailure) -> String {
    match failure {
        AppendFailure::Validation(err) => i18n::t(match err {
            TripError::EmptyPerson => "log.error.person",
            TripError::EmptyDestination => "log.error.destination",
            TripError::NonPositiveDistance => "log.error.distance",
            TripError::BadDate => "log.error.date",
        }),
        AppendFailure::FolderNotFound(folder) => {
            let mut args = BTreeMap::new();
            args.insert("folder", folder.clone());
            i18n::tf("log.error.folder", &args)
        }
        AppendFailure::NoSpreadsheet(folder) => {
            let mut args = BTreeMap::new();
            args.insert("folder", folder.clone());
            i18n::tf("log.error.sheet", &args)
        }
        AppendFailure::Backend => i18n::t("log.error.append"),
    }
}

/// The trip form. Every edit flows up as a fresh draft so the values survive
/// navigating away and back.
#[function_component(LogbookPage)]
pub fn logbook_page(p: &Props) -> Html {
    let text_input = |field: fn(&mut TripDraft, String)| {
        let draft = p.draft.clone();
        let cb = p.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                let mut next = draft.clone();
                field(&mut next, input.value());
                cb.emit(next);
            }
        })
    };

    let on_destination = {
        let draft = p.draft.clone();
        let cb = p.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            {
                let mut next = draft.clone();
                next.destination = select.value();
                cb.emit(next);
            }
        })
    };

    let onsubmit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let busy = p.status == AppendStatus::Busy;
    let status = status_line(&p.status);

    html! {
        <section class="logbook">
            <h2>{ i18n::t("log.title") }</h2>
            <form {onsubmit}>
                <label>
                    <span>{ i18n::t("log.person") }</span>
                    <input
                        type="text"
                        value={p.draft.person.clone()}
                        oninput={text_input(|d, v| d.person = v)}
                        data-testid="log-person"
                    />
                </label>
                <label>
                    <span>{ i18n::t("log.date") }</span>
                    <input
                        type="date"
                        value={p.draft.date.clone()}
                        oninput={text_input(|d, v| d.date = v)}
                        data-testid="log-date"
                    />
                </label>
                <label>
                    <span>{ i18n::t("log.distance") }</span>
                    <input
                        type="number"
                        min="0"
                        step="0.1"
                        value={p.draft.distance.clone()}
                        oninput={text_input(|d, v| d.distance = v)}
                        data-testid="log-distance"
                    />
                </label>
                <label>
                    <span>{ i18n::t("log.destination") }</span>
                    <select onchange={on_destination} data-testid="log-destination">
                        <option value="" selected={p.draft.destination.is_empty()} disabled={true} hidden={true} />
                        {
                            for p.destinations.iter().map(|name| html! {
                                <option
                                    value={name.clone()}
                                    selected={*name == p.draft.destination}
                                >
                                    { name }
                                </option>
                            })
                        }
                    </select>
                </label>
                <label>
                    <span>{ i18n::t("log.reason") }</span>
                    <input
                        type="text"
                        value={p.draft.reason.clone()}
                        oninput={text_input(|d, v| d.reason = v)}
                        data-testid="log-reason"
                    />
                </label>
                <Button label={i18n::t("log.submit")} disabled={busy} />
            </form>
            {
                status.map_or_else(Html::default, |(text, is_error)| {
                    let (class, role) = if is_error { ("error", "alert") } else { ("muted", "status") };
                    html! { <p class={class} {role} data-testid="log-status">{ text }</p> }
                })
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn render(status: AppendStatus) -> String {
        let props = Props {
            draft: TripDraft::default(),
            destinations: vec!["Bos".into(), "Strand".into()],
            status,
            on_change: Callback::noop(),
            on_submit: Callback::noop(),
        };
        block_on(LocalServerRenderer::<LogbookPage>::with_props(props).render())
    }

    #[test]
    fn form_lists_the_session_destinations() {
        let html = render(AppendStatus::Idle);
        assert!(html.contains("Bos"));
        assert!(html.contains("Strand"));
        assert!(!html.contains("data-testid=\"log-status\""));
    }

    #[test]
    fn busy_disables_the_submit_button() {
        let html = render(AppendStatus::Busy);
        assert!(html.contains("disabled"));
    }

    #[test]
    fn saved_status_names_the_worksheet() {
        let html = render(AppendStatus::Saved("Wandelingen 2026 / Femke".into()));
        assert!(html.contains("Femke"));
        assert!(html.contains("role=\"status\""));
    }

    #[test]
    fn failures_render_as_alerts() {
        let html = render(AppendStatus::Failed(AppendFailure::Validation(
            TripError::EmptyPerson,
        )));
        assert!(html.contains("role=\"alert\""));
    }
}
