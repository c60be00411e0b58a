/// One timed phase, advanced by external delta-time ticks.
///
/// The timer holds no notion of pause: a paused owner simply stops calling
/// `advance`. Cancellation is dropping the value.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTimer {
    total: f32,
    elapsed: f32,
}

impl PhaseTimer {
    pub fn new(total: f32) -> Self {
        Self {
            total: total.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Advances by up to `dt` seconds, clamped so `elapsed` never passes
    /// `total`. Returns the step actually applied.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let step = dt.max(0.0).min(self.total - self.elapsed);
        self.elapsed += step;
        step
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.total
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn total(&self) -> f32 {
        self.total
    }

    pub fn remaining(&self) -> f32 {
        self.total - self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_and_completes() {
        let mut t = PhaseTimer::new(1.0);
        assert!(!t.is_complete());
        assert_eq!(t.advance(0.25), 0.25);
        assert_eq!(t.advance(0.25), 0.25);
        assert_eq!(t.elapsed(), 0.5);
        assert_eq!(t.advance(0.5), 0.5);
        assert!(t.is_complete());
    }

    #[test]
    fn clamps_final_step() {
        let mut t = PhaseTimer::new(1.0);
        t.advance(0.75);
        assert_eq!(t.advance(0.5), 0.25);
        assert_eq!(t.elapsed(), t.total());
        assert_eq!(t.advance(0.5), 0.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        let t = PhaseTimer::new(0.0);
        assert!(t.is_complete());
    }

    #[test]
    fn negative_inputs_are_ignored() {
        let mut t = PhaseTimer::new(-2.0);
        assert!(t.is_complete());
        let mut t = PhaseTimer::new(1.0);
        assert_eq!(t.advance(-0.5), 0.0);
        assert_eq!(t.elapsed(), 0.0);
    }
}
