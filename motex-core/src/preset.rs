use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The seven trial types of the experiment protocol.
///
/// F1 is the rest trial (no animation). F2 and A play the fixed-tempo
/// animation with no audio cue. B1/B2/C1/C2 are the cue-bearing trials and
/// draw their cue slot from the peak alternator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    F1,
    F2,
    A,
    B1,
    B2,
    C1,
    C2,
}

/// Static behavior of a preset, independent of configured timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetDescriptor {
    pub plays_animation: bool,
    pub animation: Option<AnimationId>,
    pub cue_bearing: bool,
}

impl Preset {
    pub const ALL: [Preset; 7] = [
        Preset::F1,
        Preset::F2,
        Preset::A,
        Preset::B1,
        Preset::B2,
        Preset::C1,
        Preset::C2,
    ];

    pub fn descriptor(self) -> PresetDescriptor {
        use Preset::*;
        match self {
            F1 => PresetDescriptor {
                plays_animation: false,
                animation: None,
                cue_bearing: false,
            },
            F2 | A => PresetDescriptor {
                plays_animation: true,
                animation: Some(AnimationId::Tap112),
                cue_bearing: false,
            },
            B1 | B2 => PresetDescriptor {
                plays_animation: true,
                animation: Some(AnimationId::Tap135),
                cue_bearing: true,
            },
            C1 | C2 => PresetDescriptor {
                plays_animation: true,
                animation: Some(AnimationId::Tap90),
                cue_bearing: true,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::F1 => "F1",
            Preset::F2 => "F2",
            Preset::A => "A",
            Preset::B1 => "B1",
            Preset::B2 => "B2",
            Preset::C1 => "C1",
            Preset::C2 => "C2",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePresetError(pub String);

impl fmt::Display for ParsePresetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown preset `{}`", self.0)
    }
}

impl std::error::Error for ParsePresetError {}

impl FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "F1" => Ok(Preset::F1),
            "F2" => Ok(Preset::F2),
            "A" => Ok(Preset::A),
            "B1" => Ok(Preset::B1),
            "B2" => Ok(Preset::B2),
            "C1" => Ok(Preset::C1),
            "C2" => Ok(Preset::C2),
            _ => Err(ParsePresetError(s.to_string())),
        }
    }
}

/// The three hand-tap animator states, named by taps per minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationId {
    Tap90,
    Tap112,
    Tap135,
}

impl AnimationId {
    /// Animator state name as wired in the rig.
    pub fn state_name(self) -> &'static str {
        match self {
            AnimationId::Tap90 => "Tap_90",
            AnimationId::Tap112 => "Tap_112",
            AnimationId::Tap135 => "Tap_135",
        }
    }

    /// OUT-peak times (seconds from animation start) for the audible peaks,
    /// derived from the 60 fps event frames of each clip.
    pub fn cue_times(self) -> &'static [f32] {
        match self {
            AnimationId::Tap90 => &[0.667, 2.000, 3.333, 4.667, 6.000],
            AnimationId::Tap112 => &[0.533, 1.600, 2.683, 3.750, 4.817, 5.900],
            AnimationId::Tap135 => &[0.450, 1.333, 2.217, 3.117, 4.000, 4.883, 5.783],
        }
    }

    /// Scheduled offset of a 1-based cue slot, if the clip has that many peaks.
    pub fn cue_offset(self, slot: u8) -> Option<f32> {
        if slot == 0 {
            return None;
        }
        self.cue_times().get(slot as usize - 1).copied()
    }
}

impl fmt::Display for AnimationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.state_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_f1_skips_animation() {
        for p in Preset::ALL {
            let d = p.descriptor();
            assert_eq!(d.plays_animation, p != Preset::F1, "{p}");
            assert_eq!(d.animation.is_some(), d.plays_animation, "{p}");
        }
    }

    #[test]
    fn cue_bearing_family() {
        use Preset::*;
        for p in Preset::ALL {
            let expected = matches!(p, B1 | B2 | C1 | C2);
            assert_eq!(p.descriptor().cue_bearing, expected, "{p}");
        }
    }

    #[test]
    fn fixed_animation_has_no_cue() {
        assert_eq!(
            Preset::F2.descriptor().animation,
            Some(AnimationId::Tap112)
        );
        assert_eq!(Preset::A.descriptor().animation, Some(AnimationId::Tap112));
        assert!(!Preset::A.descriptor().cue_bearing);
    }

    #[test]
    fn cue_offset_lookup() {
        assert_eq!(AnimationId::Tap90.cue_offset(2), Some(2.000));
        assert_eq!(AnimationId::Tap135.cue_offset(3), Some(2.217));
        assert_eq!(AnimationId::Tap90.cue_offset(0), None);
        assert_eq!(AnimationId::Tap90.cue_offset(9), None);
    }

    #[test]
    fn parse_round_trip() {
        for p in Preset::ALL {
            assert_eq!(p.name().parse::<Preset>().unwrap(), p);
        }
        assert_eq!("b2".parse::<Preset>().unwrap(), Preset::B2);
        assert!("X9".parse::<Preset>().is_err());
    }
}
