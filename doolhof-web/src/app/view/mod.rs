mod handlers;

pub use handlers::AppHandlers;

use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::components::header::Header;
use crate::pages::gate::GatePage;
use crate::pages::logbook::LogbookPage;
use crate::pages::maze::MazePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::won::WonPage;
use crate::router::Route;
use std::rc::Rc;
use yew::prelude::*;

pub fn render_app(state: &AppState, route: Option<&Route>) -> Html {
    let handlers = AppHandlers::new(state);
    let main_view = render_main_view(state, &handlers, route);

    html! {
        <>
            <Header
                current_language={(*state.current_language).clone()}
                high_contrast={*state.high_contrast}
                on_nav_game={handlers.go_game.clone()}
                on_nav_logbook={handlers.go_logbook.clone()}
                on_lang_change={handlers.lang_change.clone()}
                on_toggle_hc={handlers.toggle_hc.clone()}
            />
            <main id="main" class="shell-main">{ main_view }</main>
        </>
    }
}

fn render_main_view(state: &AppState, handlers: &AppHandlers, route: Option<&Route>) -> Html {
    if route == Some(&Route::NotFound) {
        return html! { <NotFoundPage on_home={handlers.go_game.clone()} /> };
    }

    match *state.phase {
        Phase::Boot => {
            html! { <p class="muted" role="status">{ crate::i18n::t("boot.loading") }</p> }
        }
        Phase::Gate => render_gate(state, handlers),
        Phase::Maze => render_maze(state, handlers),
        Phase::Won => render_won(state, handlers),
        Phase::Logbook => render_logbook(state, handlers),
    }
}

fn render_gate(state: &AppState, handlers: &AppHandlers) -> Html {
    (*state.session).clone().map_or_else(Html::default, |session| {
        let config = (*state.gate_config).clone();
        let Some(stage) = session.gates.next_locked(&config) else {
            return Html::default();
        };
        html! {
            <GatePage
                stage={stage}
                total={config.len()}
                error={*state.gate_error}
                on_submit={handlers.gate_submit.clone()}
            />
        }
    })
}

fn render_maze(state: &AppState, handlers: &AppHandlers) -> Html {
    (*state.session).clone().map_or_else(Html::default, |session| {
        let view = session.maze.viewport(&state.grid);
        html! {
            <MazePage
                {view}
                moves={session.maze.moves}
                on_move={handlers.step.clone()}
                on_restart={handlers.restart.clone()}
            />
        }
    })
}

fn render_won(state: &AppState, handlers: &AppHandlers) -> Html {
    (*state.session).clone().map_or_else(Html::default, |session| {
        let grid: Rc<crate::game::Grid> = (*state.grid).clone();
        html! {
            <WonPage
                {grid}
                moves={session.maze.moves}
                on_continue={handlers.continue_to_logbook.clone()}
                on_restart={handlers.restart.clone()}
            />
        }
    })
}

fn render_logbook(state: &AppState, handlers: &AppHandlers) -> Html {
    let destinations = (*state.session)
        .as_ref()
        .filter(|session| !session.destinations.is_empty())
        .map_or_else(
            || crate::game::DESTINATIONS.iter().map(ToString::to_string).collect(),
            |session| session.destinations.clone(),
        );
    html! {
        <LogbookPage
            draft={(*state.draft).clone()}
            {destinations}
            status={(*state.append_status).clone()}
            on_change={handlers.draft_change.clone()}
            on_submit={handlers.submit_trip.clone()}
        />
    }
}
