//! # Orrery Runtime
//!
//! Entry point for the orrery binary.
//!
//! By default this opens a window and renders the animated scene. Run with
//! `--headless` to drive the motion loop without a GPU, which is mostly
//! useful on build servers and for profiling the simulation itself.

use anyhow::Result;
use clap::Parser;

use orrery::app;

/// A decorative cluster of drifting spheroids under a slow sun.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Seed for the body scatter; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Run the motion loop without opening a window
    #[arg(long)]
    headless: bool,

    /// How many frames to simulate in headless mode
    #[arg(long, default_value_t = 600)]
    frames: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt::init();

    if args.headless {
        app::run_headless(args.frames, args.seed)?;
        Ok(())
    } else {
        app::run_windowed(args.seed)
    }
}
