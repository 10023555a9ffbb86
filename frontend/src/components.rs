use crate::env_variable_utils::get_app_name;
use crate::models::Video;
use crate::router::Route;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="text-red-400 text-center mb-8 p-4 bg-red-950/20 rounded-lg">
                { msg }
            </div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub label: Option<String>,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center my-8 space-y-4">
            <div class="w-8 h-8 border-4 border-cyan-400 border-t-transparent rounded-full animate-spin"></div>
            {
                if let Some(label) = &props.label {
                    html! { <p class="text-cyan-400 animate-pulse">{ label }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    #[prop_or_default]
    pub query: String,
    pub on_search: Callback<String>,
}

/// Text of the search box. The page owns the active query and overrides
/// whatever was typed whenever that query changes.
#[derive(Debug, Clone, PartialEq, Default)]
struct SearchInput {
    text: String,
}

enum SearchInputAction {
    Typed(String),
    QueryChanged(String),
}

impl Reducible for SearchInput {
    type Action = SearchInputAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let text = match action {
            SearchInputAction::Typed(text) => text,
            SearchInputAction::QueryChanged(query) if query == self.text => return self,
            SearchInputAction::QueryChanged(query) => query,
        };
        Rc::new(SearchInput { text })
    }
}

impl SearchInput {
    /// Trimmed query to submit; blank input submits nothing.
    fn submission(&self) -> Option<String> {
        let query = self.text.trim();
        (!query.is_empty()).then(|| query.to_string())
    }
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let input = use_reducer(|| SearchInput {
        text: props.query.clone(),
    });

    {
        let input = input.dispatcher();
        use_effect_with(props.query.clone(), move |query| {
            input.dispatch(SearchInputAction::QueryChanged(query.clone()));
            || ()
        });
    }

    let on_input = {
        let input = input.dispatcher();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            input.dispatch(SearchInputAction::Typed(value));
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        let input = input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            if let Some(query) = input.submission() {
                on_search.emit(query);
            }
        })
    };

    html! {
        <form onsubmit={on_submit} class="w-full relative">
            <input
                type="text"
                class="w-full h-10 bg-black/20 border border-cyan-500/30 rounded-lg px-4 pr-20 text-white placeholder-cyan-300/50 focus:outline-none focus:border-cyan-400"
                placeholder="Search for videos..."
                value={input.text.clone()}
                oninput={on_input}
            />
            <button
                type="submit"
                class="absolute right-2 top-1/2 -translate-y-1/2 px-3 py-1 rounded-lg bg-gradient-to-r from-cyan-500 to-purple-500 text-white text-sm disabled:opacity-50"
                disabled={input.submission().is_none()}
            >
                {"Search"}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_search: Callback<String>,
    #[prop_or_default]
    pub query: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let route = use_route::<Route>();
    let about_classes = if route == Some(Route::About) {
        "px-4 py-2 rounded-lg text-cyan-400 bg-white/10"
    } else {
        "px-4 py-2 rounded-lg hover:bg-white/10"
    };

    html! {
        <header class="fixed top-0 left-0 right-0 bg-[#0a0a0a]/95 z-50 border-b border-white/10">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between gap-4">
                <Link<Route> to={Route::Home} classes="text-2xl font-bold italic text-cyan-400">
                    { get_app_name() }
                </Link<Route>>
                <div class="flex items-center gap-4 flex-1 max-w-3xl">
                    <div class="flex-1">
                        <SearchBar query={props.query.clone()} on_search={props.on_search.clone()} />
                    </div>
                    <Link<Route> to={Route::About} classes={classes!(about_classes)}>
                        {"About"}
                    </Link<Route>>
                </div>
            </div>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    pub on_select: Callback<Video>,
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let onclick = {
        let video = props.video.clone();
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(video.clone()))
    };

    let (card_class, image_class) = if props.compact {
        (
            "flex gap-4 cursor-pointer hover:bg-white/5 p-2 rounded-lg",
            "w-40 aspect-video rounded-lg overflow-hidden relative shrink-0",
        )
    } else {
        (
            "relative overflow-hidden rounded-xl bg-black/20 border border-white/10 cursor-pointer hover:border-cyan-500/50",
            "aspect-video relative overflow-hidden",
        )
    };
    let video = &props.video;

    html! {
        <div onclick={onclick} class={card_class}>
            <div class={image_class}>
                <img src={video.thumbnail.clone()} alt={video.title.clone()} class="w-full h-full object-cover" />
                <div class="absolute bottom-2 right-2 bg-black/80 text-white text-xs px-2 py-1 rounded-md">
                    { &video.duration }
                </div>
            </div>
            <div class={if props.compact { "flex-1" } else { "p-4" }}>
                <h3 class={if props.compact { "font-semibold text-sm line-clamp-2" } else { "font-semibold text-lg mb-2" }}>
                    { &video.title }
                </h3>
                <p class="text-sm text-cyan-300">{ &video.channel_title }</p>
                <div class="flex flex-wrap items-center gap-3 mt-2 text-xs text-white/70">
                    <span>{ format!("▶ {} views", video.view_count) }</span>
                    <span>{ format!("📅 {}", video.published_at) }</span>
                    <span>{ format!("⏱️ {}", video.duration) }</span>
                    {
                        if let Some(likes) = &video.like_count {
                            html! { <span>{ format!("👍 {likes}") }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </div>
    }
}
