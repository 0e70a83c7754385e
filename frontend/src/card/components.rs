use crate::card::interaction::{CardInteraction, PlaybackCommand, PlaybackGlyph, Release};
use crate::card::playback::{pause, pause_and_rewind, play_or_fall_back};
use crate::catalog::description_preview;
use crate::config::DESCRIPTION_PREVIEW_CHARS;
use crate::models::{SwipeDirection, Video};
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlMediaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SwipeCardProps {
    pub video: Video,
    /// Offset from the front of the remaining feed, 0 is the interactive card.
    pub position: usize,
    pub on_swipe: Callback<(SwipeDirection, String)>,
}

type Shared<T> = Rc<RefCell<T>>;

// Replacing the stored timeout drops, and so cancels, the previous one.
fn schedule_glyph_hide(
    timer: &Shared<Option<Timeout>>,
    interaction: &Shared<CardInteraction>,
    rerender: &UseForceUpdateHandle,
) {
    let Some(expiry) = interaction.borrow().glyph_expiry() else {
        return;
    };
    let interaction = interaction.clone();
    let rerender = rerender.clone();
    *timer.borrow_mut() = Some(Timeout::new(expiry.delay_ms, move || {
        if interaction.borrow_mut().expire_glyph(expiry.generation) {
            rerender.force_update();
        }
    }));
}

/// Events reach Yew through a listener on the app root, so `current_target`
/// is that root. The card is identified by comparing against its own node.
fn is_own_target<T: PartialEq>(target: Option<T>, card: Option<T>) -> bool {
    matches!((target, card), (Some(target), Some(card)) if target == card)
}

fn event_element(target: Option<web_sys::EventTarget>) -> Option<Element> {
    target.and_then(|t| t.dyn_into::<Element>().ok())
}

#[function_component(SwipeCard)]
pub fn swipe_card(props: &SwipeCardProps) -> Html {
    let interaction = use_mut_ref(CardInteraction::default);
    let glyph_timer = use_mut_ref(|| None::<Timeout>);
    let rerender = use_force_update();
    let video_ref = use_node_ref();
    let card_ref = use_node_ref();
    let position = props.position;
    let is_front = position == 0;

    // Only the front card plays, everything behind it waits at the start.
    {
        let video_ref = video_ref.clone();
        let interaction = interaction.clone();
        let rerender = rerender.clone();

        use_effect_with(is_front, move |is_front| {
            if let Some(media) = video_ref.cast::<HtmlMediaElement>() {
                if *is_front {
                    wasm_bindgen_futures::spawn_local(async move {
                        if play_or_fall_back(&media).await {
                            interaction.borrow_mut().playback_started(false);
                        } else {
                            interaction.borrow_mut().playback_rejected();
                        }
                        rerender.force_update();
                    });
                } else {
                    pause_and_rewind(&media);
                    interaction.borrow_mut().media_playing_changed(false);
                }
            }
            || ()
        });
    }

    let on_pointer_down = {
        let interaction = interaction.clone();
        let rerender = rerender.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |event: PointerEvent| {
            let started = interaction.borrow_mut().drag_start(
                position,
                event.pointer_id(),
                event.client_x() as f64,
            );
            if started {
                if let Some(card) = card_ref.cast::<Element>() {
                    let _ = card.set_pointer_capture(event.pointer_id());
                }
                rerender.force_update();
            }
        })
    };

    let on_pointer_move = {
        let interaction = interaction.clone();
        let rerender = rerender.clone();
        Callback::from(move |event: PointerEvent| {
            if interaction
                .borrow_mut()
                .drag_move(event.pointer_id(), event.client_x() as f64)
            {
                event.prevent_default();
                rerender.force_update();
            }
        })
    };

    let on_pointer_up = {
        let interaction = interaction.clone();
        let rerender = rerender.clone();
        let card_ref = card_ref.clone();
        let video_id = props.video.id.clone();
        Callback::from(move |event: PointerEvent| {
            let release = interaction.borrow_mut().release(event.pointer_id());
            if release == Release::Ignored {
                return;
            }
            if let Some(card) = card_ref.cast::<Element>() {
                let _ = card.release_pointer_capture(event.pointer_id());
            }
            if let Release::Commit(direction) = release {
                log::debug!("Committed {:?} swipe on {}", direction, video_id);
            }
            rerender.force_update();
        })
    };

    let on_pointer_cancel = {
        let interaction = interaction.clone();
        let rerender = rerender.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |event: PointerEvent| {
            if interaction.borrow_mut().cancel(event.pointer_id()) {
                if let Some(card) = card_ref.cast::<Element>() {
                    let _ = card.release_pointer_capture(event.pointer_id());
                }
                rerender.force_update();
            }
        })
    };

    let on_transition_end = {
        let interaction = interaction.clone();
        let on_swipe = props.on_swipe.clone();
        let video_id = props.video.id.clone();
        let card_ref = card_ref.clone();
        Callback::from(move |event: TransitionEvent| {
            // Transitions of children bubble up too, only the card itself counts.
            let own = is_own_target(event_element(event.target()), card_ref.cast::<Element>());
            let decision = interaction.borrow_mut().transition_ended(own, position);
            if let Some(direction) = decision {
                on_swipe.emit((direction, video_id.clone()));
            }
        })
    };

    let on_video_click = {
        let interaction = interaction.clone();
        let glyph_timer = glyph_timer.clone();
        let rerender = rerender.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(media) = video_ref.cast::<HtmlMediaElement>() else {
                return;
            };
            let command = interaction.borrow_mut().toggle_playback();
            match command {
                Some(PlaybackCommand::Pause) => {
                    pause(&media);
                    schedule_glyph_hide(&glyph_timer, &interaction, &rerender);
                    rerender.force_update();
                }
                Some(PlaybackCommand::Play) => {
                    let interaction = interaction.clone();
                    let glyph_timer = glyph_timer.clone();
                    let rerender = rerender.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        if play_or_fall_back(&media).await {
                            interaction.borrow_mut().playback_started(true);
                            schedule_glyph_hide(&glyph_timer, &interaction, &rerender);
                        } else {
                            interaction.borrow_mut().playback_rejected();
                        }
                        rerender.force_update();
                    });
                }
                None => {}
            }
        })
    };

    let on_media_play = {
        let interaction = interaction.clone();
        Callback::from(move |_: Event| interaction.borrow_mut().media_playing_changed(true))
    };

    let on_media_pause = {
        let interaction = interaction.clone();
        Callback::from(move |_: Event| interaction.borrow_mut().media_playing_changed(false))
    };

    let (motion, glyph, playing) = {
        let state = interaction.borrow();
        (state.motion(position), state.shown_glyph(), state.is_playing())
    };
    let video = &props.video;

    html! {
        <div
            ref={card_ref}
            class="absolute w-full max-w-xs md:max-w-sm lg:max-w-md select-none"
            style={format!("{} touch-action: pan-y;", motion.card_style())}
            onpointerdown={on_pointer_down}
            onpointermove={on_pointer_move}
            onpointerup={on_pointer_up}
            onpointercancel={on_pointer_cancel}
            ontransitionend={on_transition_end}
        >
            {
                if is_front {
                    html! {
                        <>
                            <div class="absolute top-20 right-10 z-[100] pointer-events-none"
                                 style={format!("opacity: {:.2};", motion.like_opacity)}>
                                <span class="text-4xl font-bold text-green-500">{"Liked"}</span>
                            </div>
                            <div class="absolute top-20 left-10 z-[100] pointer-events-none"
                                 style={format!("opacity: {:.2};", motion.dislike_opacity)}>
                                <span class="text-4xl font-bold text-red-500">{"Disliked"}</span>
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }
            }

            // Keyed by generation: every new glyph is a fresh node, so its fade restarts.
            <div class="absolute inset-0 z-[100] pointer-events-none">
                { for glyph.map(|shown| html! {
                    <div
                        key={shown.generation}
                        class="glyph-fade absolute inset-0 flex items-center justify-center"
                    >
                        <span class="text-6xl text-white">
                            { match shown.glyph { PlaybackGlyph::Play => "▶", PlaybackGlyph::Pause => "❚❚" } }
                        </span>
                    </div>
                })}
            </div>

            <div class="relative w-full aspect-[9/16] bg-white rounded-xl shadow-lg overflow-hidden">
                <div class="relative w-full h-full">
                    <video
                        ref={video_ref}
                        src={video.url.clone()}
                        loop={true}
                        playsinline={true}
                        class="w-full h-full object-cover"
                        aria-label={if playing { "Pause video" } else { "Play video" }}
                        onclick={on_video_click}
                        onplay={on_media_play}
                        onpause={on_media_pause}
                    />
                    <div class="absolute bottom-0 w-full bg-gradient-to-t from-black via-transparent to-transparent p-4 pointer-events-none">
                        <h1 class="text-xl font-bold text-white">{ &video.title }</h1>
                        <p class="text-sm text-gray-300">{ &video.channel_name }</p>
                        <p class="mt-2 text-sm text-gray-200">
                            { description_preview(&video.description, DESCRIPTION_PREVIEW_CHARS) }
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_target_needs_both_nodes_to_match() {
        assert!(is_own_target(Some("card"), Some("card")));
        assert!(!is_own_target(Some("badge"), Some("card")));
        assert!(!is_own_target(Some("body"), Some("card")));
        assert!(!is_own_target(None, Some("card")));
        assert!(!is_own_target::<&str>(None, None));
    }
}
