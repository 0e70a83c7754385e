use crate::env_variable_utils::MEDIA_BASE_URL;

/// Number of records requested from the query node.
pub const FEED_BATCH_SIZE: usize = 15;

/// Cards rendered at once: the interactive one plus two in the background.
pub const VISIBLE_STACK_SIZE: usize = 3;

/// Horizontal distance a release has to exceed to commit a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 300.0;

// Rotation follows the offset linearly, reaching the max angle at this offset.
pub const ROTATION_RANGE_PX: f64 = 200.0;
pub const MAX_ROTATION_DEG: f64 = 10.0;

/// Offset at which the "Liked" / "Disliked" badges are fully opaque.
pub const BADGE_RAMP_PX: f64 = 150.0;

/// Where a committed card is sent before it is removed.
pub const EXIT_OFFSET_PX: f64 = 1000.0;

pub const STACK_OFFSET_Y_PX: f64 = 20.0;
pub const STACK_SCALE_STEP: f64 = 0.05;
pub const STACK_BASE_Z_INDEX: i32 = 100;

pub const GLYPH_DURATION_MS: u32 = 1000;

pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Builds the playback address of a video from its id.
pub fn media_url(base_url: &str, video_id: &str) -> String {
    format!("{base_url}/video/{video_id}/media")
}

/// [`media_url`] against the configured asset host.
pub fn configured_media_url(video_id: &str) -> String {
    media_url(&MEDIA_BASE_URL, video_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_url_is_derived_from_the_id() {
        assert_eq!(
            media_url("https://assets.joyutils.org", "42"),
            "https://assets.joyutils.org/video/42/media"
        );
        assert_eq!(media_url("http://cdn", "42"), media_url("http://cdn", "42"));
    }
}
