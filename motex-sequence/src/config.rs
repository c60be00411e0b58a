use serde::{Deserialize, Serialize};

/// Phase durations in seconds. Defaults match the original protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub get_ready_secs: f32,
    pub count3_secs: f32,
    pub count2_secs: f32,
    pub count1_secs: f32,
    pub animation_secs: f32,
    pub black_secs: f32,
    pub red_dot_secs: f32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            get_ready_secs: 2.0,
            count3_secs: 1.0,
            count2_secs: 1.0,
            count1_secs: 1.0,
            animation_secs: 6.0,
            black_secs: 6.0,
            red_dot_secs: 1.5,
        }
    }
}

impl Timings {
    pub fn countdown_total(&self) -> f32 {
        self.get_ready_secs + self.count3_secs + self.count2_secs + self.count1_secs
    }

    /// Duration of the nth countdown sub-phase ("Get Ready", "3", "2", "1").
    pub fn countdown_sub(&self, sub: usize) -> f32 {
        match sub {
            0 => self.get_ready_secs,
            1 => self.count3_secs,
            2 => self.count2_secs,
            _ => self.count1_secs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    pub timings: Timings,
    pub instructions: String,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            instructions: DEFAULT_INSTRUCTIONS.to_string(),
        }
    }
}

impl SequenceConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

pub const DEFAULT_INSTRUCTIONS: &str = "\
1) Keep your right hand relaxed on the desk.
2) Follow the finger movement shown.
3) Keep the arm still.
4) The red dot marks the end of a trial.
5) Wait for the next countdown.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_countdown_total() {
        let t = Timings::default();
        assert_eq!(t.countdown_total(), 5.0);
        assert_eq!(t.countdown_sub(0), 2.0);
        assert_eq!(t.countdown_sub(3), 1.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = SequenceConfig::from_json(r#"{"timings": {"animation_secs": 4.0}}"#).unwrap();
        assert_eq!(cfg.timings.animation_secs, 4.0);
        assert_eq!(cfg.timings.black_secs, 6.0);
        assert_eq!(cfg.instructions, DEFAULT_INSTRUCTIONS);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(SequenceConfig::from_json("{not json").is_err());
    }
}
