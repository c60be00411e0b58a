use motex_core::{Preset, RunPhase};

use crate::alternator::PeakAlternator;
use crate::catalog::PresetCatalog;
use crate::collaborators::{AnimationVisual, Audio, Collaborators, Display};
use crate::config::SequenceConfig;
use crate::runner::{Advance, BlockRunner};
use crate::state::RunState;

/// Owns the run lifecycle: reentrancy-guarded start, stop, a single shared
/// pause flag, and the progress snapshot. At most one run is active at a
/// time, held as an `Option` handle; there is no other thread to race with.
pub struct SequenceController<D, V, A> {
    config: SequenceConfig,
    catalog: PresetCatalog,
    alternator: PeakAlternator,
    collaborators: Collaborators<D, V, A>,
    state: RunState,
    running: Option<BlockRunner>,
}

impl<D, V, A> SequenceController<D, V, A>
where
    D: Display,
    V: AnimationVisual,
    A: Audio,
{
    pub fn new(config: SequenceConfig, collaborators: Collaborators<D, V, A>) -> Self {
        let catalog = PresetCatalog::new(config.timings.clone());
        Self {
            config,
            catalog,
            alternator: PeakAlternator::new(),
            collaborators,
            state: RunState::default(),
            running: None,
        }
    }

    /// Replaces the alternator, e.g. to seed a known toggle position.
    pub fn with_alternator(mut self, alternator: PeakAlternator) -> Self {
        self.alternator = alternator;
        self
    }

    pub fn catalog(&self) -> &PresetCatalog {
        &self.catalog
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Read-only snapshot for polling consumers.
    pub fn progress(&self) -> RunState {
        self.state.clone()
    }

    pub fn play_preset(&mut self, preset: Preset) {
        self.play_block(&[preset]);
    }

    /// Starts a block. Silent no-op while a run is active or when the block
    /// is empty.
    pub fn play_block(&mut self, order: &[Preset]) {
        if self.running.is_some() {
            log::debug!("play rejected: a run is already active");
            return;
        }
        if order.is_empty() {
            log::debug!("play rejected: empty block");
            return;
        }

        self.collaborators.hide_instructions();
        self.state.reset();
        let runner = BlockRunner::start(
            order.to_vec(),
            &mut self.state,
            &self.catalog,
            &mut self.collaborators,
        );
        self.running = Some(runner);
        log::info!(
            "run started: {} trial(s), {:.1}s total",
            self.state.total_trials_in_block,
            self.state.block_total
        );
    }

    /// Cancels the active run, zeroes all progress and clears every
    /// collaborator surface. Safe to call while idle.
    pub fn stop(&mut self) {
        if self.running.take().is_some() {
            log::info!("run stopped by operator");
        }
        self.state.reset();
        self.collaborators.reset_overlay();
        self.collaborators.set_black_background(false);
        self.collaborators.set_active(false);
        self.collaborators.set_cue_target(0);
    }

    /// Freezes or resumes the whole experiment clock. No-op while idle.
    pub fn toggle_pause(&mut self) {
        if self.running.is_none() {
            return;
        }
        self.state.is_paused = !self.state.is_paused;
        log::info!(
            "{}",
            if self.state.is_paused {
                "run paused"
            } else {
                "run resumed"
            }
        );
    }

    /// Advances the active run by one tick's delta time. No-op while idle
    /// or paused: a paused run stays suspended until resumed or stopped.
    pub fn tick(&mut self, dt: f32) {
        let Some(runner) = self.running.as_mut() else {
            return;
        };
        if self.state.is_paused {
            return;
        }

        match runner.advance(
            dt,
            &mut self.state,
            &self.catalog,
            &mut self.alternator,
            &mut self.collaborators,
        ) {
            Advance::BlockComplete => {
                self.running = None;
                self.state.reset();
                log::info!("block complete");
            }
            Advance::InProgress => {}
        }
    }

    /// Shows the configured instruction text on a black background. No-op
    /// while a run is active.
    pub fn show_instructions(&mut self) {
        if self.running.is_some() {
            return;
        }
        self.collaborators.hide_countdown();
        self.collaborators.set_red_dot(false);
        self.collaborators.set_black_background(true);
        self.collaborators.show_instructions(&self.config.instructions);
        self.state.current_phase = RunPhase::Instructions;
    }

    /// Hides the instruction text again. No-op while a run is active.
    pub fn hide_instructions(&mut self) {
        if self.running.is_some() {
            return;
        }
        self.collaborators.hide_instructions();
        self.collaborators.set_black_background(false);
        if self.state.current_phase == RunPhase::Instructions {
            self.state.current_phase = RunPhase::Idle;
        }
    }
}
