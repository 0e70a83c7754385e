use crate::config::{
    BADGE_RAMP_PX, EXIT_OFFSET_PX, GLYPH_DURATION_MS, MAX_ROTATION_DEG, ROTATION_RANGE_PX,
    STACK_BASE_Z_INDEX, STACK_OFFSET_Y_PX, STACK_SCALE_STEP, SWIPE_THRESHOLD_PX,
};
use crate::models::SwipeDirection;

/// Pointer travel under which a press still counts as a tap on the video.
const TAP_SLOP_PX: f64 = 5.0;

const SETTLE_TRANSITION: &str = "transform 300ms ease-out, opacity 300ms ease-out";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardPhase {
    Idle,
    Dragging { pointer_id: i32, start_x: f64 },
    /// Locked into the exit animation towards the committed side.
    Committing,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Not our pointer, or no drag in progress.
    Ignored,
    SnapBack,
    Commit(SwipeDirection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackGlyph {
    Play,
    Pause,
}

/// A glyph on screen. `generation` changes every time a glyph is shown, so a
/// new one remounts (restarting its fade) and stale hide timers can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShownGlyph {
    pub glyph: PlaybackGlyph,
    pub generation: u32,
}

/// The hide timer to arm for the glyph currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphExpiry {
    pub generation: u32,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
}

/// Everything a single card tracks between pointer, media and transition
/// events. Lives as long as the card is mounted.
#[derive(Debug, Clone, PartialEq)]
pub struct CardInteraction {
    phase: CardPhase,
    drag_offset: f64,
    committed_direction: Option<SwipeDirection>,
    suppress_tap: bool,
    is_playing: bool,
    glyph: Option<ShownGlyph>,
    glyph_generation: u32,
}

impl Default for CardInteraction {
    fn default() -> Self {
        Self {
            phase: CardPhase::Idle,
            drag_offset: 0.0,
            committed_direction: None,
            suppress_tap: false,
            is_playing: false,
            glyph: None,
            glyph_generation: 0,
        }
    }
}

/// Resolves a released drag offset. The threshold itself does not commit.
pub fn release_direction(offset: f64) -> Option<SwipeDirection> {
    if offset > SWIPE_THRESHOLD_PX {
        Some(SwipeDirection::Right)
    } else if offset < -SWIPE_THRESHOLD_PX {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}

pub fn rotation_for_offset(offset: f64) -> f64 {
    (offset * MAX_ROTATION_DEG / ROTATION_RANGE_PX).clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG)
}

pub fn like_opacity_for_offset(offset: f64) -> f64 {
    (offset / BADGE_RAMP_PX).clamp(0.0, 1.0)
}

pub fn dislike_opacity_for_offset(offset: f64) -> f64 {
    (-offset / BADGE_RAMP_PX).clamp(0.0, 1.0)
}

impl CardInteraction {
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, CardPhase::Dragging { .. })
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn shown_glyph(&self) -> Option<ShownGlyph> {
        self.glyph
    }

    /// Starts a drag. Only the front card, and only while idle.
    pub fn drag_start(&mut self, stack_position: usize, pointer_id: i32, x: f64) -> bool {
        if stack_position != 0 || self.phase != CardPhase::Idle {
            return false;
        }
        self.phase = CardPhase::Dragging {
            pointer_id,
            start_x: x,
        };
        self.drag_offset = 0.0;
        self.committed_direction = None;
        self.suppress_tap = false;
        true
    }

    pub fn drag_move(&mut self, pointer_id: i32, x: f64) -> bool {
        match self.phase {
            CardPhase::Dragging {
                pointer_id: active,
                start_x,
            } if active == pointer_id => {
                self.drag_offset = x - start_x;
                log::trace!("drag offset {:.1}", self.drag_offset);
                true
            }
            _ => false,
        }
    }

    pub fn release(&mut self, pointer_id: i32) -> Release {
        let CardPhase::Dragging {
            pointer_id: active, ..
        } = self.phase
        else {
            return Release::Ignored;
        };
        if active != pointer_id {
            return Release::Ignored;
        }

        // The click that follows a real drag must not toggle playback.
        self.suppress_tap = self.drag_offset.abs() > TAP_SLOP_PX;

        match release_direction(self.drag_offset) {
            Some(direction) => {
                self.committed_direction = Some(direction);
                self.phase = CardPhase::Committing;
                Release::Commit(direction)
            }
            None => {
                self.snap_back();
                Release::SnapBack
            }
        }
    }

    /// A cancelled pointer never commits.
    pub fn cancel(&mut self, pointer_id: i32) -> bool {
        match self.phase {
            CardPhase::Dragging {
                pointer_id: active, ..
            } if active == pointer_id => {
                self.snap_back();
                true
            }
            _ => false,
        }
    }

    fn snap_back(&mut self) {
        self.phase = CardPhase::Idle;
        self.drag_offset = 0.0;
        self.committed_direction = None;
    }

    /// Handles the end of a card transition. Returns the decision to report
    /// upwards the first time an exit animation of the front card finishes,
    /// and `None` for every other signal.
    pub fn animation_complete(&mut self, stack_position: usize) -> Option<SwipeDirection> {
        match (self.phase, self.committed_direction) {
            (CardPhase::Committing, Some(direction)) if stack_position == 0 => {
                self.phase = CardPhase::Removed;
                Some(direction)
            }
            (CardPhase::Committing, _) | (CardPhase::Removed, _) => None,
            _ => {
                self.committed_direction = None;
                None
            }
        }
    }

    /// Handles a `transitionend` seen by the card. Only transitions of the card
    /// element itself (`own`) can finish a swipe.
    pub fn transition_ended(&mut self, own: bool, stack_position: usize) -> Option<SwipeDirection> {
        if !own {
            return None;
        }
        self.animation_complete(stack_position)
    }

    /// Horizontal position the card is rendered at.
    pub fn display_offset(&self) -> f64 {
        match (self.phase, self.committed_direction) {
            (CardPhase::Dragging { .. }, _) => self.drag_offset,
            (CardPhase::Committing | CardPhase::Removed, Some(SwipeDirection::Right)) => {
                EXIT_OFFSET_PX
            }
            (CardPhase::Committing | CardPhase::Removed, Some(SwipeDirection::Left)) => {
                -EXIT_OFFSET_PX
            }
            _ => 0.0,
        }
    }

    pub fn motion(&self, stack_position: usize) -> CardMotion {
        let front = stack_position == 0;
        let offset = if front { self.display_offset() } else { 0.0 };
        let depth = stack_position as f64;
        let leaving = matches!(self.phase, CardPhase::Committing | CardPhase::Removed);

        CardMotion {
            x: offset,
            y: 0.0 - STACK_OFFSET_Y_PX * depth,
            scale: 1.0 - STACK_SCALE_STEP * depth,
            rotate: rotation_for_offset(offset),
            opacity: if leaving { 0.0 } else { 1.0 },
            like_opacity: if front { like_opacity_for_offset(offset) } else { 0.0 },
            dislike_opacity: if front { dislike_opacity_for_offset(offset) } else { 0.0 },
            z_index: STACK_BASE_Z_INDEX - stack_position as i32,
            animated: !self.is_dragging(),
        }
    }

    /// Handles a tap on the video. `None` while a drag is in progress or when
    /// the tap is the tail of a drag that just ended.
    pub fn toggle_playback(&mut self) -> Option<PlaybackCommand> {
        if self.is_dragging() {
            return None;
        }
        if std::mem::take(&mut self.suppress_tap) {
            return None;
        }
        if self.is_playing {
            self.is_playing = false;
            self.show_glyph(PlaybackGlyph::Pause);
            Some(PlaybackCommand::Pause)
        } else {
            self.is_playing = true;
            Some(PlaybackCommand::Play)
        }
    }

    /// The media element accepted a play request.
    pub fn playback_started(&mut self, from_tap: bool) {
        self.is_playing = true;
        if from_tap {
            self.show_glyph(PlaybackGlyph::Play);
        }
    }

    /// The environment refused to play; the card stays paused.
    pub fn playback_rejected(&mut self) {
        self.is_playing = false;
    }

    pub fn media_playing_changed(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    fn show_glyph(&mut self, glyph: PlaybackGlyph) {
        self.glyph_generation = self.glyph_generation.wrapping_add(1);
        self.glyph = Some(ShownGlyph {
            glyph,
            generation: self.glyph_generation,
        });
    }

    pub fn glyph_expiry(&self) -> Option<GlyphExpiry> {
        self.glyph.map(|shown| GlyphExpiry {
            generation: shown.generation,
            delay_ms: GLYPH_DURATION_MS,
        })
    }

    /// Hides the glyph when its timer fires. A timer armed for an earlier
    /// glyph leaves a newer one alone.
    pub fn expire_glyph(&mut self, generation: u32) -> bool {
        match self.glyph {
            Some(shown) if shown.generation == generation => {
                self.glyph = None;
                true
            }
            _ => false,
        }
    }
}

/// Derived visual values for one render of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardMotion {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub opacity: f64,
    pub like_opacity: f64,
    pub dislike_opacity: f64,
    pub z_index: i32,
    pub animated: bool,
}

impl CardMotion {
    pub fn card_style(&self) -> String {
        let transition = if self.animated {
            SETTLE_TRANSITION
        } else {
            "none"
        };
        format!(
            "transform: translate({:.1}px, {:.1}px) rotate({:.2}deg) scale({:.3}); opacity: {:.2}; z-index: {}; transition: {};",
            self.x, self.y, self.rotate, self.scale, self.opacity, self.z_index, transition
        )
    }
}
