use crate::components::button::Button;
use crate::components::maze_map::MazeMap;
use crate::game::Grid;
use crate::i18n;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct Props {
    pub grid: Rc<Grid>,
    pub moves: u32,
    pub on_continue: Callback<()>,
    pub on_restart: Callback<()>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.grid, &other.grid)
            && self.moves == other.moves
            && self.on_continue == other.on_continue
            && self.on_restart == other.on_restart
    }
}

/// Win screen: reveals the whole maze and hands the player over to the
/// logbook.
#[function_component(WonPage)]
pub fn won_page(p: &Props) -> Html {
    let on_continue = {
        let cb = p.on_continue.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_restart = {
        let cb = p.on_restart.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let mut args = BTreeMap::new();
    args.insert("count", p.moves.to_string());

    html! {
        <section class="won">
            <h2 class="won-banner" role="status">{ i18n::t("won.title") }</h2>
            <p>{ i18n::t("won.body") }</p>
            <p class="muted">{ i18n::tf("maze.moves", &args) }</p>
            <MazeMap grid={p.grid.clone()} />
            <div class="won-actions">
                <Button label={i18n::t("won.continue")} onclick={on_continue} />
                <Button label={i18n::t("maze.restart")} onclick={on_restart} />
            </div>
        </section>
    }
}
