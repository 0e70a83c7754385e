use crate::catalog::description_preview;
use crate::config::DESCRIPTION_PREVIEW_CHARS;
use crate::feed::components::{use_feed, ErrorView, Header, LoadingView};
use crate::feed::state::FeedLoad;
use crate::models::Video;
use yew::prelude::*;

/// Position in a looping playlist; stepping past either end wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerCursor {
    index: usize,
}

impl PlayerCursor {
    pub fn index(self) -> usize {
        self.index
    }

    pub fn next(self, len: usize) -> Self {
        if len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % len,
        }
    }

    pub fn prev(self, len: usize) -> Self {
        if len == 0 {
            return self;
        }
        Self {
            index: if self.index == 0 { len - 1 } else { self.index - 1 },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PlaylistProps {
    pub videos: Vec<Video>,
}

#[function_component(Playlist)]
pub fn playlist(props: &PlaylistProps) -> Html {
    let cursor = use_state(PlayerCursor::default);
    let len = props.videos.len();

    let on_next = {
        let cursor = cursor.clone();
        Callback::from(move |_| cursor.set(cursor.next(len)))
    };

    let on_prev = {
        let cursor = cursor.clone();
        Callback::from(move |_| cursor.set(cursor.prev(len)))
    };

    let on_ended = {
        let cursor = cursor.clone();
        Callback::from(move |_: Event| {
            log::debug!("Video ended, advancing");
            cursor.set(cursor.next(len));
        })
    };

    let Some(video) = props.videos.get(cursor.index()) else {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-900 text-gray-400">
                <Header />
                <p>{"No videos to play."}</p>
            </div>
        };
    };

    html! {
        <div class="flex flex-col items-center justify-center min-h-screen p-4 bg-gray-900">
            <Header />
            <div class="w-full max-w-xs md:max-w-sm lg:max-w-md mt-16">
                <div class="relative w-full aspect-[9/16]">
                    <video
                        key={video.id.clone()}
                        src={video.url.clone()}
                        controls={true}
                        autoplay={true}
                        playsinline={true}
                        class="absolute inset-0 w-full h-full object-cover rounded-lg"
                        onended={on_ended}
                    />
                </div>
            </div>
            <div class="mt-4 text-center">
                <h1 class="text-lg md:text-xl font-bold text-white">{ &video.title }</h1>
                <p class="text-sm text-gray-500">{ &video.channel_name }</p>
                <p class="mt-2 text-sm text-gray-300">
                    { description_preview(&video.description, DESCRIPTION_PREVIEW_CHARS) }
                </p>
            </div>
            <div class="mt-6 flex space-x-4">
                <button
                    onclick={on_prev}
                    class="px-4 py-2 text-sm bg-gray-700 text-white rounded hover:bg-gray-600"
                >
                    {"Previous"}
                </button>
                <button
                    onclick={on_next}
                    class="px-4 py-2 text-sm bg-gray-700 text-white rounded hover:bg-gray-600"
                >
                    {"Next"}
                </button>
            </div>
        </div>
    }
}

#[function_component(VideoPlayerPage)]
pub fn video_player_page() -> Html {
    let feed = use_feed();

    match &*feed {
        FeedLoad::Pending => html! { <LoadingView /> },
        FeedLoad::Failed(e) => html! { <ErrorView message={e.to_string()} /> },
        FeedLoad::Loaded(state) => html! { <Playlist videos={state.videos().to_vec()} /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_to_the_first_video() {
        let cursor = PlayerCursor::default().next(3).next(3);
        assert_eq!(cursor.index(), 2);
        assert_eq!(cursor.next(3).index(), 0);
    }

    #[test]
    fn prev_wraps_to_the_last_video() {
        let cursor = PlayerCursor::default();
        assert_eq!(cursor.prev(4).index(), 3);
        assert_eq!(cursor.prev(4).prev(4).index(), 2);
    }

    #[test]
    fn empty_playlist_keeps_the_cursor() {
        let cursor = PlayerCursor::default();
        assert_eq!(cursor.next(0), cursor);
        assert_eq!(cursor.prev(0), cursor);
    }
}
