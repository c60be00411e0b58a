pub mod phase;
pub mod preset;

pub use phase::RunPhase;
pub use preset::{AnimationId, ParsePresetError, Preset, PresetDescriptor};
