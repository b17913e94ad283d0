use crate::components::button::Button;
use crate::i18n;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_home: Callback<()>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(p: &Props) -> Html {
    let on_home = {
        let cb = p.on_home.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <section class="not-found">
            <h2>{ i18n::t("notfound.title") }</h2>
            <p>{ i18n::t("notfound.body") }</p>
            <Button label={i18n::t("nav.maze")} onclick={on_home} />
        </section>
    }
}
