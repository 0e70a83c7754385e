use crate::error::FeedError;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

fn js_error(value: wasm_bindgen::JsValue) -> FeedError {
    FeedError::PlaybackRejected(format!("{value:?}"))
}

/// Starts playback and waits for the browser to accept or refuse it.
pub async fn play(media: &HtmlMediaElement) -> Result<(), FeedError> {
    let promise = media.play().map_err(js_error)?;
    JsFuture::from(promise).await.map_err(js_error)?;
    Ok(())
}

/// Plays if allowed. A refusal (autoplay policy) leaves the element paused and
/// muted and is only logged.
pub async fn play_or_fall_back(media: &HtmlMediaElement) -> bool {
    match play(media).await {
        Ok(()) => true,
        Err(e) => {
            log::debug!("{e}");
            let _ = media.pause();
            media.set_muted(true);
            false
        }
    }
}

pub fn pause(media: &HtmlMediaElement) {
    if let Err(e) = media.pause() {
        log::warn!("Failed to pause video: {e:?}");
    }
}

pub fn pause_and_rewind(media: &HtmlMediaElement) {
    pause(media);
    media.set_current_time(0.0);
}
