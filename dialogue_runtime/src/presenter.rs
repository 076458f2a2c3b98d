//! The presentation port - where sessions send display and cue commands.

use dialogue_graph::{AudioAction, AudioHandle, SpriteHandle};

/// Receives display and cue commands from a running session.
///
/// The engine drives this port one way; the sole signal travelling back is
/// [`DialogueSession::select_option`](crate::DialogueSession::select_option).
/// Implementations should be cheap: commands are emitted mid-traversal.
pub trait Presenter {
    /// Display a spoken line. `speaker` is empty for the closing line.
    fn show_dialogue(&mut self, speaker: &str, text: &str);

    /// Display choice labels, in option order.
    fn show_options(&mut self, labels: &[String]);

    /// Clear any visible choices.
    fn hide_all_options(&mut self);

    /// Swap the sprite shown in an image slot. `None` clears the slot.
    fn set_sprite(&mut self, slot: u32, sprite: Option<&SpriteHandle>);

    /// Drive an audio source slot.
    fn handle_audio(
        &mut self,
        slot: u32,
        clip: Option<&AudioHandle>,
        action: AudioAction,
        looped: bool,
    );
}

/// Presenter that drops every command, for headless or scripted sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn show_dialogue(&mut self, _speaker: &str, _text: &str) {}

    fn show_options(&mut self, _labels: &[String]) {}

    fn hide_all_options(&mut self) {}

    fn set_sprite(&mut self, _slot: u32, _sprite: Option<&SpriteHandle>) {}

    fn handle_audio(
        &mut self,
        _slot: u32,
        _clip: Option<&AudioHandle>,
        _action: AudioAction,
        _looped: bool,
    ) {
    }
}
