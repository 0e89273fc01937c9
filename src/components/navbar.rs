use yew::prelude::*;

use crate::route::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub route: Route,
}

fn nav_link(label: &'static str, target: Route, active: bool) -> Html {
    html! {
        <a
            class={classes!("navbar-item", active.then_some("has-background-grey-lighter"))}
            aria-current={active.then_some("page")}
            href={target.href()}
        >
            { label }
        </a>
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let on_home = props.route == Route::Home;
    let on_people = matches!(props.route, Route::People { .. });

    html! {
        <nav
            data-cy="nav"
            class="navbar is-fixed-top has-shadow"
            role="navigation"
            aria-label="main navigation"
        >
            <div class="container">
                <div class="navbar-brand">
                    { nav_link("Home", Route::Home, on_home) }
                    { nav_link("People", Route::People { slug: None }, on_people) }
                </div>
            </div>
        </nav>
    }
}
