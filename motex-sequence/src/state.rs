use motex_core::RunPhase;
use serde::Serialize;

/// Progress telemetry for the operator console. Mutated only by the active
/// run; observers clone a snapshot and never hold it across ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunState {
    pub current_phase: RunPhase,
    pub phase_elapsed: f32,
    pub phase_total: f32,
    pub block_elapsed: f32,
    pub block_total: f32,
    /// 1-based trial index; 0 while idle.
    pub current_trial_index: usize,
    pub total_trials_in_block: usize,
    pub current_preset_name: &'static str,
    pub is_paused: bool,
    pub has_upcoming_cue: bool,
    pub cue_time_remaining: f32,
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            current_phase: RunPhase::Idle,
            phase_elapsed: 0.0,
            phase_total: 0.0,
            block_elapsed: 0.0,
            block_total: 0.0,
            current_trial_index: 0,
            total_trials_in_block: 0,
            current_preset_name: "",
            is_paused: false,
            has_upcoming_cue: false,
            cue_time_remaining: 0.0,
        }
    }
}

impl RunState {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
