use crate::about::AboutPage;
use crate::feed::HomePage;
use crate::watch::WatchPage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/watch")]
    Watch,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// `/?search=<query>`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HomeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// `/watch?v=<video id>`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WatchQuery {
    #[serde(default)]
    pub v: String,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Watch => html! { <WatchPage /> },
        Route::About => html! { <AboutPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-[#0a0a0a] text-white">
                <div class="bg-white/5 p-8 rounded-lg text-center">
                    <h1 class="text-2xl font-bold mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-cyan-400 hover:underline">
                        {"Back to trending videos"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

pub fn get_query_param(name: &str) -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    let url = web_sys::Url::new(&href).ok()?;
    url.search_params().get(name).filter(|value| !value.is_empty())
}

/// Rewrites the `search` parameter of the address bar without adding a
/// history entry. `None` removes it.
pub fn replace_search_param(query: Option<&str>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(href) = window.location().href() else {
        return;
    };
    let Ok(url) = web_sys::Url::new(&href) else {
        return;
    };

    match query {
        Some(query) => url.search_params().set("search", query),
        None => url.search_params().delete("search"),
    }

    if let Ok(history) = window.history() {
        if let Err(e) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url.href()))
        {
            log::warn!("Failed to update address bar: {e:?}");
        }
    }
}
