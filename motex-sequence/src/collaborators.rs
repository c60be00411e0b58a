use motex_core::AnimationId;

/// Overlay surface shown to the participant. Calls are idempotent and only
/// issued at phase boundaries; the engine never polls it back.
pub trait Display {
    fn show_countdown_label(&mut self, label: &str);
    fn hide_countdown(&mut self);
    fn set_black_background(&mut self, on: bool);
    fn set_red_dot(&mut self, on: bool);
    fn show_instructions(&mut self, text: &str);
    fn hide_instructions(&mut self);
}

/// Hand rig playing a fixed-duration animation clip. The engine trusts the
/// configured animation duration; it never observes clip completion.
pub trait AnimationVisual {
    fn set_active(&mut self, on: bool);
    fn play_animation(&mut self, animation: AnimationId);
}

/// Audio cue sink. The visual collaborator fires the sound at its own event
/// markers; the engine only tells it which OUT-peak to fire on. Slot 0
/// disables the cue.
pub trait Audio {
    fn set_cue_target(&mut self, slot: u8);
}

/// Collaborator slots held by the controller. An absent collaborator turns
/// its calls into no-ops, so a run degrades instead of failing.
#[derive(Debug)]
pub struct Collaborators<D, V, A> {
    pub display: Option<D>,
    pub visual: Option<V>,
    pub audio: Option<A>,
}

impl<D, V, A> Collaborators<D, V, A>
where
    D: Display,
    V: AnimationVisual,
    A: Audio,
{
    pub fn new(display: Option<D>, visual: Option<V>, audio: Option<A>) -> Self {
        Self {
            display,
            visual,
            audio,
        }
    }

    pub(crate) fn show_countdown_label(&mut self, label: &str) {
        if let Some(d) = &mut self.display {
            d.show_countdown_label(label);
        }
    }

    pub(crate) fn hide_countdown(&mut self) {
        if let Some(d) = &mut self.display {
            d.hide_countdown();
        }
    }

    pub(crate) fn set_black_background(&mut self, on: bool) {
        if let Some(d) = &mut self.display {
            d.set_black_background(on);
        }
    }

    pub(crate) fn set_red_dot(&mut self, on: bool) {
        if let Some(d) = &mut self.display {
            d.set_red_dot(on);
        }
    }

    pub(crate) fn show_instructions(&mut self, text: &str) {
        if let Some(d) = &mut self.display {
            d.show_instructions(text);
        }
    }

    pub(crate) fn hide_instructions(&mut self) {
        if let Some(d) = &mut self.display {
            d.hide_instructions();
        }
    }

    pub(crate) fn set_active(&mut self, on: bool) {
        if let Some(v) = &mut self.visual {
            v.set_active(on);
        }
    }

    pub(crate) fn play_animation(&mut self, animation: AnimationId) {
        if let Some(v) = &mut self.visual {
            v.play_animation(animation);
        }
    }

    pub(crate) fn set_cue_target(&mut self, slot: u8) {
        if let Some(a) = &mut self.audio {
            a.set_cue_target(slot);
        }
    }

    /// Clears countdown text, red dot and instructions; the black background
    /// is left to the caller.
    pub(crate) fn reset_overlay(&mut self) {
        self.hide_countdown();
        self.set_red_dot(false);
        self.hide_instructions();
    }
}

/// Stand-in for an absent collaborator, for headless controllers and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Disconnected;

impl Display for Disconnected {
    fn show_countdown_label(&mut self, _label: &str) {}
    fn hide_countdown(&mut self) {}
    fn set_black_background(&mut self, _on: bool) {}
    fn set_red_dot(&mut self, _on: bool) {}
    fn show_instructions(&mut self, _text: &str) {}
    fn hide_instructions(&mut self) {}
}

impl AnimationVisual for Disconnected {
    fn set_active(&mut self, _on: bool) {}
    fn play_animation(&mut self, _animation: AnimationId) {}
}

impl Audio for Disconnected {
    fn set_cue_target(&mut self, _slot: u8) {}
}

impl Collaborators<Disconnected, Disconnected, Disconnected> {
    /// A controller with every collaborator slot empty.
    pub fn disconnected() -> Self {
        Self::new(None, None, None)
    }
}
