//! Cycle Replay
//!
//! Feeds recorded bus snapshots (one JSON object per line) through the car
//! interface and prints each cycle's state and events as JSON lines.

use anyhow::Context;
use car_interface::{init_logging, CarInterface, ReplayConfig};
use car_profile::VehicleProfile;
use car_state::BusSnapshot;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::{info, Level};

fn main() -> anyhow::Result<()> {
    let config = ReplayConfig::load().context("Failed to load replay configuration")?;
    let level: Level = config
        .log_level
        .parse()
        .with_context(|| format!("Invalid log level {:?}", config.log_level))?;
    init_logging(level)?;

    info!("=== Cycle Replay v{} ===", env!("CARGO_PKG_VERSION"));

    let profile = VehicleProfile::for_fingerprint(&config.model, &config.vin)?;
    let mut interface = CarInterface::new(profile, config.builder);

    let reader: Box<dyn BufRead> = match &config.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let snapshot: BusSnapshot = serde_json::from_str(&line)
            .with_context(|| format!("Malformed bus snapshot on line {}", idx + 1))?;

        let output = interface.update(&snapshot);
        serde_json::to_writer(&mut out, &output)?;
        writeln!(out)?;
    }

    info!("Replayed {} cycles", interface.cycles());
    Ok(())
}
