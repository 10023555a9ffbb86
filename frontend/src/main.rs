mod about;
mod components;
mod config;
mod env_variable_utils;
mod feed;
mod logging;
mod models;
mod router;
mod utils;
mod watch;
mod youtube;

use crate::config::API_CONFIG;
use crate::env_variable_utils::{get_app_name, is_debug_mode};
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
    logging::init(is_debug_mode());

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", API: \"{}\", KEY CONFIGURED: {}",
        get_app_name(),
        API_CONFIG.base_url,
        API_CONFIG.api_key.is_some()
    );
    if API_CONFIG.api_key.is_none() {
        log::warn!("No YOUTUBE_API_KEY in ENV_CONFIG, every request will fail");
    }
}
