use yew::prelude::*;

#[function_component(Loader)]
pub fn loader() -> Html {
    html! {
        <div class="Loader" data-cy="loader">
            <div class="Loader__content" />
        </div>
    }
}
