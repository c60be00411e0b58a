pub mod alternator;
pub mod blocks;
pub mod catalog;
pub mod collaborators;
pub mod config;
pub mod controller;
mod runner;
pub mod state;

pub use alternator::PeakAlternator;
pub use catalog::PresetCatalog;
pub use collaborators::{AnimationVisual, Audio, Collaborators, Disconnected, Display};
pub use config::{SequenceConfig, Timings};
pub use controller::SequenceController;
pub use state::RunState;
