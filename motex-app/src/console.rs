use motex_core::AnimationId;
use motex_sequence::{AnimationVisual, Audio, Display};

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

/// Logs what a VR overlay would be told to draw.
#[derive(Debug, Default)]
pub struct ConsoleDisplay;

impl Display for ConsoleDisplay {
    fn show_countdown_label(&mut self, label: &str) {
        log::info!("overlay: countdown \"{label}\"");
    }
    fn hide_countdown(&mut self) {
        log::debug!("overlay: countdown hidden");
    }
    fn set_black_background(&mut self, on: bool) {
        log::debug!("overlay: black background {}", on_off(on));
    }
    fn set_red_dot(&mut self, on: bool) {
        log::info!("overlay: red dot {}", on_off(on));
    }
    fn show_instructions(&mut self, text: &str) {
        log::info!("overlay: instructions\n{text}");
    }
    fn hide_instructions(&mut self) {
        log::debug!("overlay: instructions hidden");
    }
}

/// Logs what the hand rig would play.
#[derive(Debug, Default)]
pub struct ConsoleVisual;

impl AnimationVisual for ConsoleVisual {
    fn set_active(&mut self, on: bool) {
        log::debug!("hand rig {}", if on { "shown" } else { "hidden" });
    }
    fn play_animation(&mut self, animation: AnimationId) {
        log::info!("hand rig: playing {animation}");
    }
}

/// Logs the cue target handed to the audio trigger.
#[derive(Debug, Default)]
pub struct ConsoleAudio;

impl Audio for ConsoleAudio {
    fn set_cue_target(&mut self, slot: u8) {
        if slot == 0 {
            log::debug!("audio: cue disabled");
        } else {
            log::info!("audio: cue on OUT-peak {slot}");
        }
    }
}
