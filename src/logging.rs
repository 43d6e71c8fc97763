use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pick the log level from the verbosity flags
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::WARN
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install the global stderr subscriber. Later calls are ignored.
pub fn init_logging(level: Level) {
    let filter = EnvFilter::new(format!("iq_adapt={}", level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
