use crate::game::{Grid, Tile};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct Props {
    pub grid: Rc<Grid>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.grid, &other.grid)
    }
}

/// The full maze, revealed on the win screen.
#[function_component(MazeMap)]
pub fn maze_map(p: &Props) -> Html {
    html! {
        <div class="maze-map" role="img" aria-label={crate::i18n::t("won.body")} data-testid="maze-map">
            {
                for p.grid.iter_rows().map(|row| html! {
                    <div class="maze-map-row">
                        {
                            for row.iter().map(|cell| {
                                let kind = Tile::from_cell(*cell).as_str();
                                html! { <span class={classes!("tile", format!("tile-{kind}"))} /> }
                            })
                        }
                    </div>
                })
            }
        </div>
    }
}
