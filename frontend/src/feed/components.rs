use crate::card::components::SwipeCard;
use crate::env_variable_utils::get_app_name;
use crate::feed::api::load_videos;
use crate::feed::state::{FeedAction, FeedLoad, FeedState};
use crate::models::SwipeDirection;
use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="w-full py-4 shadow-md fixed top-0 z-50 bg-gray-900">
            <div class="max-w-screen-md mx-auto px-4">
                <h1 class="text-2xl font-bold text-center text-white">{ get_app_name() }</h1>
            </div>
        </header>
    }
}

#[function_component(LoadingView)]
pub fn loading_view() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 text-gray-300">
            <Header />
            <p>{"Loading..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorViewProps {
    pub message: String,
}

#[function_component(ErrorView)]
pub fn error_view(props: &ErrorViewProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-900 p-4">
            <Header />
            <p class="text-red-500 text-center">{"Error loading videos."}</p>
            <p class="mt-2 text-sm text-gray-500 text-center">{ &props.message }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EndOfFeedProps {
    pub liked: usize,
    pub total: usize,
}

#[function_component(EndOfFeed)]
pub fn end_of_feed(props: &EndOfFeedProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-screen p-4 bg-gray-900">
            <Header />
            <h2 class="text-2xl font-bold mt-20 text-white">{"You've reached the end!"}</h2>
            <p class="mt-2 text-gray-400">{"No more videos to display."}</p>
            <p class="mt-1 text-sm text-gray-500">
                { format!("You liked {} of {} videos.", props.liked, props.total) }
            </p>
        </div>
    }
}

/// Runs the one-shot feed fetch on mount and hands back the reducer that holds
/// its outcome.
#[hook]
pub fn use_feed() -> UseReducerHandle<FeedLoad> {
    let feed = use_reducer(FeedLoad::default);

    {
        let feed = feed.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                feed.dispatch(FeedAction::Fetched(load_videos().await));
            });
            || ()
        });
    }

    feed
}

#[derive(Properties, PartialEq)]
pub struct CardStackProps {
    pub state: FeedState,
    pub on_swipe: Callback<(SwipeDirection, String)>,
}

#[function_component(CardStack)]
pub fn card_stack(props: &CardStackProps) -> Html {
    html! {
        <div class="relative flex flex-col items-center justify-center min-h-screen overflow-hidden bg-gray-900">
            <Header />
            // Back cards first so the front card ends up on top in document order too.
            { for props.state.visible_stack().into_iter().rev().map(|stacked| {
                let key = stacked.video.id.clone();
                html! {
                    <SwipeCard
                        key={key}
                        video={stacked.video}
                        position={stacked.position}
                        on_swipe={props.on_swipe.clone()}
                    />
                }
            })}
            <div class="absolute bottom-10 w-full flex justify-center pointer-events-none">
                <div class="flex items-center space-x-2 bg-black bg-opacity-50 px-4 py-2 rounded-full">
                    <span class="text-white">{"⇔"}</span>
                    <span class="text-white text-sm">{"Swipe left or right"}</span>
                    <span class="text-gray-400 text-xs">
                        { format!("{} / {}", props.state.current_index() + 1, props.state.videos().len()) }
                    </span>
                </div>
            </div>
        </div>
    }
}

#[function_component(VideoFeed)]
pub fn video_feed() -> Html {
    let feed = use_feed();

    let on_swipe = {
        let feed = feed.clone();
        Callback::from(move |(direction, video_id): (SwipeDirection, String)| {
            feed.dispatch(FeedAction::SwipeCompleted {
                direction,
                video_id,
            });
        })
    };

    match &*feed {
        FeedLoad::Pending => html! { <LoadingView /> },
        FeedLoad::Failed(e) => html! { <ErrorView message={e.to_string()} /> },
        FeedLoad::Loaded(state) if state.is_exhausted() => html! {
            <EndOfFeed liked={state.liked_ids().len()} total={state.videos().len()} />
        },
        FeedLoad::Loaded(state) => html! {
            <CardStack state={state.clone()} on_swipe={on_swipe} />
        },
    }
}
