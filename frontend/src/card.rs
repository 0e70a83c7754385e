pub mod components;
pub mod interaction;
pub mod playback;
