use clap::Parser;
use std::path::PathBuf;

mod adapter;
mod config;
mod error;
mod input;
mod logging;
mod output;
mod transform;

use config::AdaptConfig;
use output::DEFAULT_SAMPLE_RATE;

/// Scale the radius and rotate the phase of every sample in an IQ recording
#[derive(Parser, Debug)]
#[command(name = "iq-adapt")]
#[command(version, about, long_about = None)]
struct Args {
    /// Sample file to load samples from (.dat, .txt or .wav)
    #[arg(value_name = "SAMPLE_IN")]
    sample_in: PathBuf,

    /// Sample file to write adapted samples to (.dat, .txt or .wav)
    #[arg(value_name = "SAMPLE_OUT")]
    sample_out: PathBuf,

    /// Radius scale factor, typically in [0, 1]
    #[arg(value_name = "RADIUS", allow_negative_numbers = true)]
    radius: f64,

    /// Phase offset in degrees
    #[arg(value_name = "ANGLE", allow_negative_numbers = true)]
    angle: f64,

    /// Sample rate for WAV output when the input has none (Hz)
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_RATE)]
    rate: u32,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn run(args: Args) -> error::Result<()> {
    let config = AdaptConfig::new(
        args.sample_in,
        args.sample_out,
        args.radius,
        args.angle,
        args.rate,
    )?;
    adapter::process_file(&config)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    logging::init_logging(logging::level_for(args.verbose, args.quiet));

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
