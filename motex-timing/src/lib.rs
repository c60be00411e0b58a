pub mod clock;
pub mod timer;

pub use clock::{TickClock, TickStats};
pub use timer::PhaseTimer;
