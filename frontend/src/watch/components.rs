use crate::components::{Spinner, VideoCard};
use crate::config::EMBED_URL;
use crate::models::{Comment, Video};
use crate::youtube::api::default_client;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

const COLLAPSED_COMMENTS: usize = 3;

#[derive(Properties, PartialEq)]
pub struct CommentListProps {
    pub comments: Vec<Comment>,
}

#[function_component(CommentList)]
pub fn comment_list(props: &CommentListProps) -> Html {
    let expanded = use_state(|| false);
    let shown = if *expanded {
        props.comments.len()
    } else {
        props.comments.len().min(COLLAPSED_COMMENTS)
    };

    html! {
        <div class="mb-8">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-xl font-semibold">{"💬 Comments"}</h2>
                {
                    if props.comments.len() > COLLAPSED_COMMENTS {
                        html! {
                            <button
                                class="text-cyan-400 hover:text-cyan-300"
                                onclick={let expanded = expanded.clone(); move |_| expanded.set(!*expanded)}
                            >
                                { if *expanded { "Show Less ▲" } else { "Show More ▼" } }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <div class="space-y-6">
                { for props.comments.iter().take(shown).map(|comment| html! {
                    <div key={comment.id.clone()} class="p-4 rounded-lg bg-white/5">
                        <div class="flex items-center justify-between mb-2">
                            <h3 class="font-medium text-cyan-400">{ &comment.author_name }</h3>
                            <span class="text-sm text-white/50">{ &comment.published_at }</span>
                        </div>
                        <p class="text-white/80">{ &comment.text }</p>
                        <div class="mt-3 text-sm text-white/50">{ format!("👍 {}", comment.like_count) }</div>
                    </div>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct VideoPlayerProps {
    pub video: Video,
    pub on_related_select: Callback<Video>,
}

#[function_component(VideoPlayer)]
pub fn video_player(props: &VideoPlayerProps) -> Html {
    let comments = use_state(Vec::<Comment>::new);
    let related = use_state(Vec::<Video>::new);
    let loading = use_state(|| true);

    // Comments and related videos are fetched together; both degrade to empty.
    {
        let comments = comments.clone();
        let related = related.clone();
        let loading = loading.clone();

        use_effect_with(props.video.id.clone(), move |video_id| {
            let active = Rc::new(Cell::new(true));
            let video_id = video_id.clone();
            loading.set(true);

            {
                let active = active.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let client = default_client();
                    let (comment_list, related_list) = futures::join!(
                        client.get_comments(&video_id),
                        client.get_related(&video_id)
                    );
                    if !active.get() {
                        log::debug!("Discarding extras for {video_id}, player moved on");
                        return;
                    }
                    comments.set(comment_list);
                    related.set(related_list);
                    loading.set(false);
                });
            }

            move || active.set(false)
        });
    }

    let video = &props.video;
    html! {
        <div class="max-w-[1600px] mx-auto px-4">
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <div class="lg:col-span-2">
                    <div class="aspect-video w-full bg-black rounded-xl overflow-hidden mb-6">
                        <iframe
                            key={video.id.clone()}
                            src={format!("{EMBED_URL}/{}?autoplay=1", video.id)}
                            title={video.title.clone()}
                            class="w-full h-full"
                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; fullscreen; gyroscope; picture-in-picture"
                        />
                    </div>

                    <div class="mb-8">
                        <h1 class="text-2xl font-bold mb-2">{ &video.title }</h1>
                        <div class="flex flex-wrap items-center gap-4 border-b border-white/10 pb-4">
                            <span class="text-cyan-400">{ format!("⏱️ {}", video.duration) }</span>
                            <span class="text-white/70">{ format!("{} views", video.view_count) }</span>
                            <span class="text-white/70">{ &video.channel_title }</span>
                            <span class="text-white/70">{ &video.published_at }</span>
                            {
                                if let Some(likes) = &video.like_count {
                                    html! { <span class="text-white/70">{ format!("👍 {likes}") }</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>

                    {
                        if *loading {
                            html! { <Spinner /> }
                        } else {
                            html! { <CommentList key={video.id.clone()} comments={(*comments).clone()} /> }
                        }
                    }
                </div>

                <div class="lg:col-span-1">
                    <h3 class="text-xl font-semibold mb-6">{"Related Videos"}</h3>
                    {
                        if *loading {
                            html! { <Spinner /> }
                        } else {
                            html! {
                                <div class="space-y-4">
                                    { for related.iter().map(|related_video| html! {
                                        <VideoCard
                                            key={related_video.id.clone()}
                                            video={related_video.clone()}
                                            on_select={props.on_related_select.clone()}
                                            compact={true}
                                        />
                                    })}
                                </div>
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}
