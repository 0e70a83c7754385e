use crate::feed::components::VideoFeed;
use crate::player::VideoPlayerPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Feed,
    #[at("/player")]
    Player,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Feed => html! { <VideoFeed /> },
        Route::Player => html! { <VideoPlayerPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-900">
                <div class="bg-gray-800 p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-white mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Feed} classes="text-blue-400 hover:underline">
                        {"Go back to the feed"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}
