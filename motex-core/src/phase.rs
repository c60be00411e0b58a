use serde::{Deserialize, Serialize};

/// Timeline phases of a run. `Idle` is both the initial and terminal state;
/// `Instructions` is only entered by the operator while no run is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Idle,
    Instructions,
    Countdown,
    Animation,
    Black,
    RedDot,
}

impl Default for RunPhase {
    fn default() -> Self {
        RunPhase::Idle
    }
}

impl RunPhase {
    pub fn is_idle(self) -> bool {
        matches!(self, RunPhase::Idle)
    }

    /// Operator-facing label.
    pub fn label(self) -> &'static str {
        match self {
            RunPhase::Idle => "Idle",
            RunPhase::Instructions => "Instructions",
            RunPhase::Countdown => "Countdown",
            RunPhase::Animation => "Animation",
            RunPhase::Black => "Black",
            RunPhase::RedDot => "RedDot",
        }
    }
}
