use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use motex_core::Preset;
use motex_sequence::{Collaborators, RunState, SequenceConfig, SequenceController, blocks};
use motex_timing::TickClock;

use crate::console::{ConsoleAudio, ConsoleDisplay, ConsoleVisual};

/// Operator console for the motor-stimulation sequence engine.
#[derive(Debug, Parser)]
#[command(name = "motex", version, about)]
pub struct Args {
    /// What to run: a preset (f1, f2, a, b1, b2, c1, c2), a standard block
    /// (block1..block4), or `instructions`.
    pub run: String,

    /// Timing and instruction-text overrides as JSON.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Tick rate of the run loop in Hz.
    #[arg(long, default_value_t = 60.0)]
    pub tick_hz: f64,

    /// Print progress snapshots as JSON lines instead of readable text.
    #[arg(long)]
    pub json: bool,
}

enum Command {
    Preset(Preset),
    Block(&'static [Preset]),
    Instructions,
}

fn parse_command(input: &str) -> Result<Command> {
    let lower = input.to_ascii_lowercase();
    if lower == "instructions" {
        return Ok(Command::Instructions);
    }
    if let Some(n) = lower.strip_prefix("block") {
        let n: usize = n
            .parse()
            .with_context(|| format!("bad block number in `{input}`"))?;
        return blocks::standard(n)
            .map(Command::Block)
            .ok_or_else(|| anyhow!("no standard block {n} (have 1..=4)"));
    }
    Ok(Command::Preset(input.parse::<Preset>()?))
}

fn load_config(path: Option<&Path>) -> Result<SequenceConfig> {
    match path {
        Some(p) => {
            let text =
                fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            SequenceConfig::from_json(&text).with_context(|| format!("parsing {}", p.display()))
        }
        None => Ok(SequenceConfig::default()),
    }
}

pub fn run(args: Args) -> Result<()> {
    if !(args.tick_hz.is_finite() && args.tick_hz > 0.0) {
        bail!("--tick-hz must be positive");
    }
    let command = parse_command(&args.run)?;
    let config = load_config(args.config.as_deref())?;

    let collaborators = Collaborators::new(
        Some(ConsoleDisplay),
        Some(ConsoleVisual),
        Some(ConsoleAudio),
    );
    let mut controller = SequenceController::new(config, collaborators);

    match command {
        Command::Instructions => {
            controller.show_instructions();
            println!("(press Enter to clear instructions)");
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            controller.hide_instructions();
            return Ok(());
        }
        Command::Preset(p) => controller.play_preset(p),
        Command::Block(order) => controller.play_block(order),
    }

    let tick = Duration::from_secs_f64(1.0 / args.tick_hz);
    let mut clock = TickClock::new();
    let mut last_report = f32::MIN;
    while controller.is_running() {
        thread::sleep(tick);
        controller.tick(clock.delta());

        let snapshot = controller.progress();
        // Console readout at roughly 4 Hz, independent of the tick rate.
        if snapshot.block_elapsed - last_report >= 0.25 || !controller.is_running() {
            last_report = snapshot.block_elapsed;
            report(&snapshot, args.json)?;
        }
    }

    let stats = clock.stats();
    log::info!(
        "run finished after {} ticks ({:.1} Hz effective)",
        stats.ticks,
        stats.effective_hz
    );
    Ok(())
}

fn report(s: &RunState, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(s)?);
        return Ok(());
    }
    let cue = if s.has_upcoming_cue {
        format!("  cue in {:.2}s", s.cue_time_remaining)
    } else {
        String::new()
    };
    println!(
        "{:<9} {:<3} trial {:>2}/{:<2}  phase {:>4.1}/{:<4.1}s  block {:>6.1}/{:<6.1}s{cue}",
        s.current_phase.label(),
        s.current_preset_name,
        s.current_trial_index,
        s.total_trials_in_block,
        s.phase_elapsed,
        s.phase_total,
        s.block_elapsed,
        s.block_total,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_presets_and_blocks() {
        assert!(matches!(
            parse_command("c1").unwrap(),
            Command::Preset(Preset::C1)
        ));
        assert!(matches!(parse_command("F1").unwrap(), Command::Preset(Preset::F1)));
        assert!(matches!(parse_command("block2").unwrap(), Command::Block(_)));
        assert!(matches!(
            parse_command("Instructions").unwrap(),
            Command::Instructions
        ));
        assert!(parse_command("block9").is_err());
        assert!(parse_command("blockx").is_err());
        assert!(parse_command("d4").is_err());
    }
}
