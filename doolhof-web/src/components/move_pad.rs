use crate::game::Direction;
use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_move: Callback<Direction>,
}

fn label_key(dir: Direction) -> &'static str {
    match dir {
        Direction::Up => "maze.up",
        Direction::Down => "maze.down",
        Direction::Left => "maze.left",
        Direction::Right => "maze.right",
    }
}

const fn glyph(dir: Direction) -> &'static str {
    match dir {
        Direction::Up => "\u{2191}",
        Direction::Down => "\u{2193}",
        Direction::Left => "\u{2190}",
        Direction::Right => "\u{2192}",
    }
}

/// The four movement buttons, laid out as a cross.
#[function_component(MovePad)]
pub fn move_pad(p: &Props) -> Html {
    let button = |dir: Direction| {
        let cb = p.on_move.clone();
        let onclick = Callback::from(move |_: MouseEvent| cb.emit(dir));
        html! {
            <button
                class={classes!("move", format!("move-{dir}"))}
                {onclick}
                aria-label={i18n::t(label_key(dir))}
            >
                { glyph(dir) }
            </button>
        }
    };

    html! {
        <div class="move-pad" data-testid="move-pad">
            <div class="move-row">{ button(Direction::Up) }</div>
            <div class="move-row">
                { button(Direction::Left) }
                { button(Direction::Right) }
            </div>
            <div class="move-row">{ button(Direction::Down) }</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn pad_renders_all_four_directions() {
        let props = Props {
            on_move: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<MovePad>::with_props(props).render());
        for dir in Direction::ALL {
            assert!(html.contains(&format!("move-{dir}")), "missing {dir}");
        }
    }
}
