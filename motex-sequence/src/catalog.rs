use motex_core::{Preset, PresetDescriptor};

use crate::config::Timings;

/// Pure lookup of preset behavior and duration. Total over the closed
/// preset enumeration, so there are no error cases.
#[derive(Debug, Clone)]
pub struct PresetCatalog {
    timings: Timings,
}

impl PresetCatalog {
    pub fn new(timings: Timings) -> Self {
        Self { timings }
    }

    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    pub fn describe(&self, preset: Preset) -> PresetDescriptor {
        preset.descriptor()
    }

    /// Countdown + animation (when the preset animates) + blackout + cue-dot.
    pub fn duration(&self, preset: Preset) -> f32 {
        let t = &self.timings;
        let animation = if preset.descriptor().plays_animation {
            t.animation_secs
        } else {
            0.0
        };
        t.countdown_total() + animation + t.black_secs + t.red_dot_secs
    }

    pub fn block_total(&self, order: &[Preset]) -> f32 {
        order.iter().map(|p| self.duration(*p)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motex_core::Preset::*;

    #[test]
    fn durations_with_default_timings() {
        let catalog = PresetCatalog::new(Timings::default());
        // 5.0 countdown + 6.0 black + 1.5 red dot, plus 6.0 animation
        assert_eq!(catalog.duration(F1), 12.5);
        assert_eq!(catalog.duration(A), 18.5);
        assert_eq!(catalog.duration(B2), 18.5);
    }

    #[test]
    fn block_total_is_sum_of_durations() {
        let catalog = PresetCatalog::new(Timings::default());
        let order = [F1, A, B1, C2];
        let expected: f32 = order.iter().map(|p| catalog.duration(*p)).sum();
        assert_eq!(catalog.block_total(&order), expected);
        assert_eq!(catalog.block_total(&order), 12.5 + 18.5 * 3.0);
    }
}
