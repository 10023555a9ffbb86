use crate::components::Header;
use crate::env_variable_utils::get_app_name;
use crate::router::{HomeQuery, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    let navigator = use_navigator();

    let on_search = Callback::from(move |query: String| {
        if let Some(navigator) = &navigator {
            let query = HomeQuery {
                search: Some(query),
            };
            if let Err(e) = navigator.push_with_query(&Route::Home, &query) {
                log::error!("Failed to open search: {e}");
            }
        }
    });

    html! {
        <div class="min-h-screen bg-[#0a0a0a] text-white">
            <Header on_search={on_search} />
            <main class="container mx-auto px-4 pt-24 max-w-3xl space-y-6">
                <h1 class="text-3xl font-bold text-cyan-400">{ format!("About {}", get_app_name()) }</h1>
                <p class="text-white/80">
                    { "A small video browser built on the YouTube Data API. It shows what is trending in your region, \
                       lets you narrow the feed down by category and search across all public videos." }
                </p>
                <h2 class="text-xl font-semibold">{"How it works"}</h2>
                <ul class="list-disc pl-6 space-y-2 text-white/70">
                    <li>{"Feeds load 24 videos at a time and keep going as you scroll."}</li>
                    <li>{"The trending feed refreshes itself every five minutes."}</li>
                    <li>{"Videos play through the embedded YouTube player, with top comments and related videos beside them."}</li>
                </ul>
                <p class="text-white/50 text-sm">
                    {"Video data, thumbnails and playback are provided by YouTube. This site stores nothing about you."}
                </p>
            </main>
        </div>
    }
}
