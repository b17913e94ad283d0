use crate::components::button::Button;
use crate::components::move_pad::MovePad;
use crate::components::viewport::ViewportGrid;
use crate::game::{Direction, Viewport};
use crate::i18n;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: Viewport,
    pub moves: u32,
    pub on_move: Callback<Direction>,
    pub on_restart: Callback<()>,
}

#[function_component(MazePage)]
pub fn maze_page(p: &Props) -> Html {
    let on_restart = {
        let cb = p.on_restart.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let mut args = BTreeMap::new();
    args.insert("count", p.moves.to_string());

    html! {
        <section class="maze">
            <h2>{ i18n::t("app.subtitle") }</h2>
            <p class="muted">{ i18n::t("maze.legend") }</p>
            <ViewportGrid view={p.view} />
            <MovePad on_move={p.on_move.clone()} />
            <p class="muted" data-testid="move-count">{ i18n::tf("maze.moves", &args) }</p>
            <Button label={i18n::t("maze.restart")} onclick={on_restart} />
        </section>
    }
}
