#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod bootstrap;
pub mod phase;
pub mod routing;
pub mod state;
pub mod view;

pub use phase::Phase;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);

    let navigator = use_navigator();
    let route = use_route::<Route>();

    let game_phase = (*app_state.session)
        .as_ref()
        .map(|session| phase::phase_for_session(&app_state.gate_config, session));

    routing::use_sync_route_with_phase(&app_state.phase, navigator, route.clone());
    routing::use_sync_phase_with_route(&app_state.phase, route.clone(), game_phase);

    view::render_app(&app_state, route.as_ref())
}
