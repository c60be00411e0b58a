use motex_core::{Preset, RunPhase};
use motex_timing::PhaseTimer;

use crate::alternator::PeakAlternator;
use crate::catalog::PresetCatalog;
use crate::collaborators::{AnimationVisual, Audio, Collaborators, Display};
use crate::state::RunState;

const COUNTDOWN_LABELS: [&str; 4] = ["Get Ready", "3", "2", "1"];

/// Where the runner is inside the current trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Countdown sub-phase 0..=3 ("Get Ready", "3", "2", "1").
    Countdown(usize),
    Animation,
    Black,
    RedDot,
}

pub(crate) enum Advance {
    InProgress,
    BlockComplete,
}

/// Resumable state machine for one block. All persisted position is
/// (trial, step, timer); `advance` moves it forward by one tick's delta and
/// performs collaborator calls at each phase boundary. Transitions triggered
/// by a completing timer happen within the same tick; delta left over past
/// the completed phase is discarded.
#[derive(Debug)]
pub(crate) struct BlockRunner {
    block: Vec<Preset>,
    /// 0-based index into `block`.
    trial: usize,
    step: Step,
    timer: PhaseTimer,
}

impl BlockRunner {
    /// Builds the runner and enters the first trial's countdown, issuing the
    /// phase-entry collaborator calls synchronously.
    pub fn start<D, V, A>(
        block: Vec<Preset>,
        state: &mut RunState,
        catalog: &PresetCatalog,
        out: &mut Collaborators<D, V, A>,
    ) -> Self
    where
        D: Display,
        V: AnimationVisual,
        A: Audio,
    {
        state.total_trials_in_block = block.len();
        state.block_total = catalog.block_total(&block);
        let mut runner = Self {
            block,
            trial: 0,
            step: Step::Countdown(0),
            timer: PhaseTimer::new(0.0),
        };
        runner.enter_trial(state, catalog, out);
        runner
    }

    pub fn advance<D, V, A>(
        &mut self,
        dt: f32,
        state: &mut RunState,
        catalog: &PresetCatalog,
        alternator: &mut PeakAlternator,
        out: &mut Collaborators<D, V, A>,
    ) -> Advance
    where
        D: Display,
        V: AnimationVisual,
        A: Audio,
    {
        let step_dt = self.timer.advance(dt);
        state.phase_elapsed = self.timer.elapsed();
        state.block_elapsed += step_dt;

        if state.current_phase == RunPhase::Animation && state.has_upcoming_cue {
            state.cue_time_remaining -= step_dt;
            if state.cue_time_remaining <= 0.0 {
                state.cue_time_remaining = 0.0;
                state.has_upcoming_cue = false;
            }
        }

        // Zero-duration phases fall through within the same tick.
        while self.timer.is_complete() {
            if let Advance::BlockComplete = self.transition(state, catalog, alternator, out) {
                return Advance::BlockComplete;
            }
        }
        Advance::InProgress
    }

    fn transition<D, V, A>(
        &mut self,
        state: &mut RunState,
        catalog: &PresetCatalog,
        alternator: &mut PeakAlternator,
        out: &mut Collaborators<D, V, A>,
    ) -> Advance
    where
        D: Display,
        V: AnimationVisual,
        A: Audio,
    {
        match self.step {
            Step::Countdown(sub) => {
                if sub < COUNTDOWN_LABELS.len() - 1 {
                    self.enter_countdown_sub(sub + 1, state, catalog, out);
                } else {
                    out.hide_countdown();
                    if !self.enter_animation(state, catalog, alternator, out) {
                        self.enter_black(state, catalog, out);
                    }
                }
            }
            Step::Animation => {
                state.has_upcoming_cue = false;
                state.cue_time_remaining = 0.0;
                out.set_active(false);
                self.enter_black(state, catalog, out);
            }
            Step::Black => self.enter_red_dot(state, catalog, out),
            Step::RedDot => {
                out.set_red_dot(false);
                out.hide_countdown();
                out.set_black_background(false);

                state.current_phase = RunPhase::Idle;
                state.phase_elapsed = 0.0;
                state.phase_total = 0.0;
                state.has_upcoming_cue = false;
                state.cue_time_remaining = 0.0;

                self.trial += 1;
                if self.trial < self.block.len() {
                    self.enter_trial(state, catalog, out);
                } else {
                    return Advance::BlockComplete;
                }
            }
        }
        Advance::InProgress
    }

    fn enter_trial<D, V, A>(
        &mut self,
        state: &mut RunState,
        catalog: &PresetCatalog,
        out: &mut Collaborators<D, V, A>,
    ) where
        D: Display,
        V: AnimationVisual,
        A: Audio,
    {
        let preset = self.block[self.trial];
        state.current_trial_index = self.trial + 1;
        state.current_preset_name = preset.name();
        log::info!(
            "trial {}/{}: preset {}",
            state.current_trial_index,
            state.total_trials_in_block,
            preset
        );

        // Clean slate, countdown on black.
        out.reset_overlay();
        out.set_active(false);
        out.set_black_background(true);
        out.set_red_dot(false);

        state.current_phase = RunPhase::Countdown;
        self.enter_countdown_sub(0, state, catalog, out);
    }

    fn enter_countdown_sub<D, V, A>(
        &mut self,
        sub: usize,
        state: &mut RunState,
        catalog: &PresetCatalog,
        out: &mut Collaborators<D, V, A>,
    ) where
        D: Display,
        V: AnimationVisual,
        A: Audio,
    {
        self.step = Step::Countdown(sub);
        let total = catalog.timings().countdown_sub(sub);
        self.timer = PhaseTimer::new(total);
        state.phase_elapsed = 0.0;
        state.phase_total = total;
        out.show_countdown_label(COUNTDOWN_LABELS[sub]);
    }

    /// Returns false when the preset has no animation, so the caller can go
    /// straight to the blackout.
    fn enter_animation<D, V, A>(
        &mut self,
        state: &mut RunState,
        catalog: &PresetCatalog,
        alternator: &mut PeakAlternator,
        out: &mut Collaborators<D, V, A>,
    ) -> bool
    where
        D: Display,
        V: AnimationVisual,
        A: Audio,
    {
        let descriptor = self.block[self.trial].descriptor();
        let Some(animation) = descriptor.animation else {
            return false;
        };

        let slot = if descriptor.cue_bearing {
            alternator.next()
        } else {
            0
        };
        out.set_cue_target(slot);

        // The overlay goes dark while the hand plays.
        out.set_black_background(false);
        out.set_red_dot(false);
        out.hide_countdown();
        out.set_active(true);
        out.play_animation(animation);

        match animation.cue_offset(slot) {
            Some(offset) => {
                state.has_upcoming_cue = true;
                state.cue_time_remaining = offset;
            }
            None => {
                state.has_upcoming_cue = false;
                state.cue_time_remaining = 0.0;
            }
        }
        log::debug!("animation {animation}, cue slot {slot}");

        self.step = Step::Animation;
        let total = catalog.timings().animation_secs;
        self.timer = PhaseTimer::new(total);
        state.phase_elapsed = 0.0;
        state.phase_total = total;
        state.current_phase = RunPhase::Animation;
        true
    }

    fn enter_black<D, V, A>(
        &mut self,
        state: &mut RunState,
        catalog: &PresetCatalog,
        out: &mut Collaborators<D, V, A>,
    ) where
        D: Display,
        V: AnimationVisual,
        A: Audio,
    {
        out.set_black_background(true);
        out.set_red_dot(false);

        self.step = Step::Black;
        let total = catalog.timings().black_secs;
        self.timer = PhaseTimer::new(total);
        state.phase_elapsed = 0.0;
        state.phase_total = total;
        state.current_phase = RunPhase::Black;
    }

    fn enter_red_dot<D, V, A>(
        &mut self,
        state: &mut RunState,
        catalog: &PresetCatalog,
        out: &mut Collaborators<D, V, A>,
    ) where
        D: Display,
        V: AnimationVisual,
        A: Audio,
    {
        out.set_red_dot(true);

        self.step = Step::RedDot;
        let total = catalog.timings().red_dot_secs;
        self.timer = PhaseTimer::new(total);
        state.phase_elapsed = 0.0;
        state.phase_total = total;
        state.current_phase = RunPhase::RedDot;
    }
}
