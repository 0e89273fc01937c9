use yew::prelude::*;

use super::{Navbar, PeoplePage};
use crate::hooks::use_hash_route;
use crate::route::Route;

#[function_component(App)]
pub fn app() -> Html {
    let route = use_hash_route();

    let page = match &route {
        Route::Home => html! { <h1 class="title">{ "Home Page" }</h1> },
        Route::People { slug } => html! { <PeoplePage selected={slug.clone()} /> },
        Route::NotFound => html! { <h1 class="title">{ "Page not found" }</h1> },
    };

    html! {
        <div class="has-navbar-fixed-top">
            <div data-cy="app">
                <Navbar route={route.clone()} />

                <main class="section">
                    <div class="container">
                        { page }
                    </div>
                </main>
            </div>
        </div>
    }
}
