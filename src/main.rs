mod api;
mod components;
mod config;
mod hooks;
mod person;
mod resolve;
mod route;
mod state;
mod table;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
