use crate::game::Viewport;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: Viewport,
}

/// The 3×3 local view. Each tile carries a `tile-*` class for styling and an
/// aria label with its kind, so the view reads sensibly to screen readers.
#[function_component(ViewportGrid)]
pub fn viewport_grid(p: &Props) -> Html {
    html! {
        <div class="viewport" role="img" aria-label={crate::i18n::t("app.subtitle")} data-testid="viewport">
            {
                for p.view.rows().iter().map(|row| html! {
                    <div class="viewport-row">
                        {
                            for row.iter().map(|tile| {
                                let kind = tile.as_str();
                                html! {
                                    <span
                                        class={classes!("tile", format!("tile-{kind}"))}
                                        aria-label={kind}
                                    />
                                }
                            })
                        }
                    </div>
                })
            }
        </div>
    }
}
