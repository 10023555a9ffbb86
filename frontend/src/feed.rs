use crate::components::{ErrorMessage, Header, Spinner, VideoCard};
use crate::config::REFRESH_INTERVAL_MS;
use crate::feed::components::{CategoryBar, NoResults};
use crate::feed::refresh::RefreshTimer;
use crate::feed::state::{FeedSource, FeedState, PageRequest};
use crate::feed::visibility::{rearm, IntersectionWatch};
use crate::models::{Category, SearchResult, Video};
use crate::router::{get_query_param, replace_search_param, Route, WatchQuery};
use crate::youtube::api::{default_client, YouTubeClient};
use crate::youtube::error::ApiError;
use crate::youtube::transport::Transport;
use web_sys::Element;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod refresh;
pub mod state;
pub mod visibility;

async fn fetch_page<T: Transport>(
    client: &YouTubeClient<T>,
    request: &PageRequest,
) -> Result<SearchResult, ApiError> {
    let page_token = request.page_token.as_deref();
    match &request.source {
        FeedSource::Trending { category_id } => {
            client.list_trending(Some(category_id), page_token).await
        }
        FeedSource::Search { query, category_id } => {
            client.search(query, Some(category_id), page_token).await
        }
    }
}

/// The category bar always starts with "All", whether or not the API listed it.
fn with_all_category(mut categories: Vec<Category>) -> Vec<Category> {
    if !categories.iter().any(Category::is_all) {
        categories.insert(0, Category::all());
    }
    categories
}

fn initial_source() -> FeedSource {
    match get_query_param("search") {
        Some(query) => FeedSource::Search {
            query,
            category_id: Category::ALL_ID.to_string(),
        },
        None => FeedSource::default(),
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let feed = use_mut_ref(|| FeedState::new(initial_source()));
    let redraw = use_force_update();
    let categories = use_state(Vec::<Category>::new);
    let initial_loading = use_state(|| true);
    let watch = use_mut_ref(IntersectionWatch::default);
    let grid = use_node_ref();
    let navigator = use_navigator();

    // Fetches the requested page and applies it unless it went stale meanwhile.
    let load_page = {
        let feed = feed.clone();
        let redraw = redraw.clone();
        Callback::from(move |request: PageRequest| {
            let feed = feed.clone();
            let redraw = redraw.clone();
            redraw.force_update();

            wasm_bindgen_futures::spawn_local(async move {
                let result = fetch_page(&default_client(), &request).await;
                let applied = feed.borrow_mut().apply(&request, result);
                if applied {
                    redraw.force_update();
                }
            });
        })
    };

    // First page and categories on mount, then a periodic refresh until unmount.
    {
        let feed = feed.clone();
        let categories = categories.clone();
        let initial_loading = initial_loading.clone();
        let redraw = redraw.clone();
        let load_page = load_page.clone();

        use_effect_with((), move |_| {
            let request = {
                let mut state = feed.borrow_mut();
                let source = state.source().clone();
                state.reset(source)
            };

            {
                let feed = feed.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let client = default_client();
                    let (category_list, result) = futures::join!(
                        client.list_categories(),
                        fetch_page(&client, &request)
                    );
                    categories.set(with_all_category(category_list));
                    if !feed.borrow_mut().apply(&request, result) {
                        log::debug!("Initial page arrived after the feed moved on");
                    }
                    initial_loading.set(false);
                    redraw.force_update();
                });
            }

            let timer = {
                let feed = feed.clone();
                RefreshTimer::start(REFRESH_INTERVAL_MS, move || {
                    log::debug!("Refreshing feed");
                    let request = feed.borrow_mut().refresh();
                    load_page.emit(request);
                })
            };

            move || {
                feed.borrow_mut().teardown();
                drop(timer);
            }
        });
    }

    let on_load_more = {
        let feed = feed.clone();
        let load_page = load_page.clone();
        Callback::from(move |_: ()| {
            let request = feed.borrow_mut().request_more();
            if let Some(request) = request {
                load_page.emit(request);
            }
        })
    };

    // Re-attach the scroll trigger to whatever card is now last.
    {
        let feed = feed.clone();
        let watch = watch.clone();
        let grid = grid.clone();
        use_effect(move || {
            let armed = {
                let state = feed.borrow();
                !state.is_loading() && state.has_more()
            };
            let container = grid.cast::<Element>();
            rearm(&mut *watch.borrow_mut(), container.as_ref(), armed, on_load_more);
            || ()
        });
    }

    let on_search = {
        let feed = feed.clone();
        let load_page = load_page.clone();
        Callback::from(move |query: String| {
            let category_id = feed.borrow().source().category_id().to_string();
            replace_search_param(Some(query.as_str()));
            let request = feed
                .borrow_mut()
                .reset(FeedSource::Search { query, category_id });
            load_page.emit(request);
        })
    };

    let on_category_select = {
        let feed = feed.clone();
        let load_page = load_page.clone();
        Callback::from(move |category_id: String| {
            replace_search_param(None);
            let request = feed.borrow_mut().reset(FeedSource::Trending { category_id });
            load_page.emit(request);
        })
    };

    let on_video_select = Callback::from(move |video: Video| {
        if let Some(navigator) = &navigator {
            let query = WatchQuery { v: video.id };
            if let Err(e) = navigator.push_with_query(&Route::Watch, &query) {
                log::error!("Failed to open video: {e}");
            }
        }
    });

    if *initial_loading {
        return html! {
            <div class="min-h-screen bg-[#0a0a0a] flex items-center justify-center">
                <Spinner label={"Loading Clipverse contents..."} />
            </div>
        };
    }

    let (videos, query, selected, error, loading) = {
        let state = feed.borrow();
        (
            state.videos().to_vec(),
            state.source().query().unwrap_or_default().to_string(),
            state.source().category_id().to_string(),
            state.error().map(str::to_string),
            state.is_loading(),
        )
    };
    let show_no_results = videos.is_empty() && !loading && error.is_none() && !query.is_empty();

    html! {
        <div class="min-h-screen bg-[#0a0a0a] text-white">
            <Header on_search={on_search} query={query.clone()} />

            <main class="container mx-auto px-4 pt-24">
                <div class="mb-8 sticky top-16 bg-[#0a0a0a]/95 z-40 py-4">
                    <CategoryBar
                        categories={(*categories).clone()}
                        selected={selected}
                        on_select={on_category_select}
                    />
                </div>

                <ErrorMessage error_message={error} />

                <div ref={grid} class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
                    { for videos.iter().enumerate().map(|(index, video)| html! {
                        <div key={format!("{}-{index}", video.id)}>
                            <VideoCard video={video.clone()} on_select={on_video_select.clone()} />
                        </div>
                    })}
                </div>

                { if show_no_results { html! { <NoResults query={query.clone()} /> } } else { html! {} } }
                { if loading { html! { <Spinner /> } } else { html! {} } }
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::youtube::api::fallback_categories;

    #[test]
    fn all_category_is_prepended_once() {
        let listed = vec![Category {
            id: "10".into(),
            title: "Music".into(),
            color: "#06b6d4".into(),
        }];
        let ids: Vec<_> = with_all_category(listed)
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, ["0", "10"]);

        let fallback = with_all_category(fallback_categories());
        assert_eq!(fallback, fallback_categories());
    }
}
