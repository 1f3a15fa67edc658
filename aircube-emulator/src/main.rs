//! AirCube - four-screen display emulator
//!
//! Host driver for the AirCube rendering engine. Replays a scripted
//! controller session against one cube, samples the four screens at the
//! configured frame rate and optionally writes every presented frame as a
//! PPM snapshot. Reports the cube sends back are printed as wire JSON.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use aircube_core::config::EmulatorConfig;
use aircube_core::Device;
use aircube_display::GlyphFont;

use crate::config::{load_config, log_config_summary};
use crate::controller::Controller;
use crate::credentials::load_credentials;
use crate::presenter::{FrameHandoff, Presenter};
use crate::scenario::parse_scenario;

mod config;
mod controller;
mod credentials;
mod presenter;
mod scenario;
mod snapshot;

#[derive(Parser, Debug)]
#[command(
    name = "aircube-emulator",
    version,
    about = "Replay a controller session against an emulated AirCube"
)]
struct Args {
    /// Scenario to replay (JSON lines)
    scenario: PathBuf,

    /// Configuration file
    #[arg(long, default_value = "aircube.toml")]
    config: PathBuf,

    /// Log level, overrides the config file
    #[arg(long)]
    log_level: Option<log::LevelFilter>,

    /// Write presented frames here, overrides the config file
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,

    /// Font asset, overrides the config file
    #[arg(long)]
    font: Option<PathBuf>,

    /// Credentials file, overrides the config file
    #[arg(long)]
    credentials: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let (config, source) = load_config(&args.config)?;

    let level = args
        .log_level
        .unwrap_or_else(|| config.logging.level.to_level_filter());
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    log::info!("AirCube emulator starting...");
    log_config_summary(&args.config, source, &config);

    let steps = fs::read_to_string(&args.scenario)
        .with_context(|| format!("reading {}", args.scenario.display()))
        .and_then(|text| parse_scenario(&text))?;
    log::info!("{} scenario steps", steps.len());

    let font_path = args
        .font
        .clone()
        .unwrap_or_else(|| PathBuf::from(config.display.font_path.as_str()));
    let credentials_path = args
        .credentials
        .clone()
        .unwrap_or_else(|| PathBuf::from(config.pairing.credentials_path.as_str()));
    let snapshot_dir = args.snapshot_dir.clone().or_else(|| {
        config
            .display
            .snapshot_dir
            .as_ref()
            .map(|dir| PathBuf::from(dir.as_str()))
    });

    let device = Device::new(load_font(&font_path), load_credentials(&credentials_path));
    let handoff = Arc::new(FrameHandoff::new());
    let presenter = Presenter::spawn(handoff.clone(), frame_period(&config), snapshot_dir);

    let mut controller = Controller::new(
        device,
        config.server.clone(),
        credentials_path,
        handoff,
    );
    let mut result = Ok(());
    for (i, step) in steps.into_iter().enumerate() {
        result = controller
            .run_step(step)
            .with_context(|| format!("step {}", i + 1));
        if result.is_err() {
            break;
        }
    }

    let presented = presenter.stop();
    log::info!(
        "Finished {:?} ({}), {} frames presented, {} reports sent",
        controller.device().state(),
        if controller.connection().is_some() {
            "connected"
        } else {
            "disconnected"
        },
        presented,
        controller.outbox().len()
    );
    for report in controller.outbox() {
        println!("{}", report);
    }
    result
}

fn frame_period(config: &EmulatorConfig) -> Duration {
    Duration::from_millis(config.display.frame_period_ms() as u64)
}

/// Load the 8x8 glyph table; lists render without text if this fails
fn load_font(path: &Path) -> Option<GlyphFont> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Font {} unavailable: {}", path.display(), e);
            return None;
        }
    };
    match GlyphFont::from_bytes(&bytes) {
        Ok(font) => {
            log::info!("Loaded font {}", path.display());
            Some(font)
        }
        Err(e) => {
            log::warn!("Font {} rejected: {}", path.display(), e);
            None
        }
    }
}
