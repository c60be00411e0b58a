use std::time::Instant;

/// Wall-clock delta source for a real-time tick loop. Each call to `delta`
/// returns the seconds since the previous call and records the sample for
/// an end-of-run summary.
#[derive(Debug, Clone)]
pub struct TickClock {
    last: Instant,
    ticks: u64,
    total_secs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStats {
    pub ticks: u64,
    pub mean_tick_secs: f64,
    pub effective_hz: f64,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            ticks: 0,
            total_secs: 0.0,
        }
    }

    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f64();
        self.last = now;
        self.ticks += 1;
        self.total_secs += dt;
        dt as f32
    }

    pub fn stats(&self) -> TickStats {
        let mean = if self.ticks > 0 {
            self.total_secs / self.ticks as f64
        } else {
            0.0
        };
        TickStats {
            ticks: self.ticks,
            mean_tick_secs: mean,
            effective_hz: if mean > 0.0 { 1.0 / mean } else { 0.0 },
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn delta_is_monotonic_and_counted() {
        let mut clock = TickClock::new();
        thread::sleep(Duration::from_millis(5));
        let dt = clock.delta();
        assert!(dt > 0.0);
        thread::sleep(Duration::from_millis(5));
        let dt = clock.delta();
        assert!(dt > 0.0);
        let stats = clock.stats();
        assert_eq!(stats.ticks, 2);
        assert!(stats.mean_tick_secs > 0.0);
        assert!(stats.effective_hz > 0.0);
    }

    #[test]
    fn stats_on_fresh_clock_are_zero() {
        let clock = TickClock::new();
        let stats = clock.stats();
        assert_eq!(stats.ticks, 0);
        assert_eq!(stats.effective_hz, 0.0);
    }
}
