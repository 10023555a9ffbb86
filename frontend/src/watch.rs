use crate::components::{ErrorMessage, Header, Spinner};
use crate::models::Video;
use crate::router::{HomeQuery, Route, WatchQuery};
use crate::watch::components::VideoPlayer;
use crate::youtube::api::default_client;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;

#[function_component(WatchPage)]
pub fn watch_page() -> Html {
    let location = use_location();
    let navigator = use_navigator();
    let video = use_state(|| None::<Video>);
    let error_message = use_state(|| None::<String>);
    let loading = use_state(|| true);

    let video_id = location
        .and_then(|location| location.query::<WatchQuery>().ok())
        .map(|query| query.v)
        .filter(|id| !id.is_empty());

    // Reloads whenever the `v` parameter changes, including related-video clicks.
    {
        let video = video.clone();
        let error_message = error_message.clone();
        let loading = loading.clone();

        use_effect_with(video_id.clone(), move |video_id| {
            let active = Rc::new(Cell::new(true));

            match video_id.clone() {
                None => {
                    video.set(None);
                    error_message.set(Some("No video ID provided".to_string()));
                    loading.set(false);
                }
                Some(video_id) => {
                    loading.set(true);
                    error_message.set(None);

                    let active = active.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result = default_client().get_video(&video_id).await;
                        if !active.get() {
                            return;
                        }
                        match result {
                            Ok(found) => video.set(Some(found)),
                            Err(e) => {
                                video.set(None);
                                error_message.set(Some(e.user_message().to_string()));
                            }
                        }
                        loading.set(false);
                    });
                }
            }

            move || active.set(false)
        });
    }

    let on_search = {
        let navigator = navigator.clone();
        Callback::from(move |query: String| {
            if let Some(navigator) = &navigator {
                let query = HomeQuery {
                    search: Some(query),
                };
                if let Err(e) = navigator.push_with_query(&Route::Home, &query) {
                    log::error!("Failed to open search: {e}");
                }
            }
        })
    };

    let on_related_select = Callback::from(move |related: Video| {
        if let Some(navigator) = &navigator {
            let query = WatchQuery { v: related.id };
            if let Err(e) = navigator.push_with_query(&Route::Watch, &query) {
                log::error!("Failed to open related video: {e}");
            }
        }
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let content = if *loading {
        html! {
            <div class="min-h-[60vh] flex items-center justify-center">
                <Spinner label={"Loading video..."} />
            </div>
        }
    } else if let Some(video) = &*video {
        html! { <VideoPlayer video={video.clone()} on_related_select={on_related_select} /> }
    } else {
        let message = (*error_message)
            .clone()
            .unwrap_or_else(|| "Video not found.".to_string());
        html! {
            <div class="min-h-[60vh] flex items-center justify-center">
                <ErrorMessage error_message={Some(message)} />
            </div>
        }
    };

    html! {
        <div class="min-h-screen bg-[#0a0a0a] text-white">
            <Header on_search={on_search} />
            <div class="pt-20">
                { content }
            </div>
        </div>
    }
}
