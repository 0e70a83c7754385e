mod card;
mod catalog;
mod config;
mod env_variable_utils;
mod error;
mod feed;
mod logger;
mod models;
mod player;
mod router;

use crate::env_variable_utils::{get_app_name, is_debug_mode, GRAPHQL_URL, MEDIA_BASE_URL};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    logger::init(is_debug_mode());

    log::info!(
        "NAME: \"{}\", GRAPHQL: \"{}\", MEDIA: \"{}\", DEBUG: \"{}\"",
        get_app_name(),
        &*GRAPHQL_URL,
        &*MEDIA_BASE_URL,
        is_debug_mode()
    );

    yew::Renderer::<App>::new().render();
}
