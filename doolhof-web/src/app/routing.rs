#[cfg(any(target_arch = "wasm32", test))]
use crate::app::phase::Phase;
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_phase(phase: Phase, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_phase(&phase);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

/// Phase change requested by a route change. Game routes always resolve to
/// the session-derived `game_phase`, so a deep link to the maze cannot skip
/// locked gates or undo a win; while booting no route may change the phase.
#[cfg(any(target_arch = "wasm32", test))]
fn next_phase_for_route(
    current_phase: Phase,
    route: Option<Route>,
    game_phase: Option<Phase>,
) -> Option<Phase> {
    if current_phase == Phase::Boot {
        return None;
    }
    let new_phase = match route? {
        Route::Logbook => Phase::Logbook,
        route if route.is_game() => game_phase?,
        _ => return None,
    };
    (new_phase != current_phase).then_some(new_phase)
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_phase(
    phase: &UseStateHandle<Phase>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let phase = phase.clone();
    use_effect_with((phase, active_route), move |(phase, current_route)| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_phase(**phase, current_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_phase_with_route(
    phase: &UseStateHandle<Phase>,
    route: Option<Route>,
    game_phase: Option<Phase>,
) {
    let phase = phase.clone();
    use_effect_with((route, game_phase), move |(route, game_phase)| {
        if let Some(new_phase) = next_phase_for_route(*phase, route.clone(), *game_phase) {
            phase.set(new_phase);
        }
    });
}
