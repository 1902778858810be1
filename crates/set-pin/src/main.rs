use clap::Parser;
use rpi_gpio::{board, GpioPort, OutputLevel, PinController, PinError};
use tracing::{debug, error, level_filters::LevelFilter, warn};
use tracing_subscriber::EnvFilter;

use std::{env, error::Error, path::Path};

/// Drive one Raspberry Pi header pin high or low.
#[derive(Debug, Parser)]
#[command(name = "set-pin", version, args_override_self = true)]
struct Opts {
    /// Physical pin number on the board header.
    #[arg(long, allow_negative_numbers = true)]
    pin: i64,

    /// Level to drive the pin to, "high" or "low".
    ///
    /// Any other value leaves the pin configured as an output without
    /// changing its level.
    #[arg(long)]
    level: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Config {
    pin: i64,
    level: Option<OutputLevel>,
}

impl From<Opts> for Config {
    fn from(opts: Opts) -> Self {
        let level = match opts.level.as_deref() {
            None => None,
            Some(token) => {
                let level = OutputLevel::from_token(token);
                if level.is_none() {
                    warn!("ignoring level {token:?}, expected \"high\" or \"low\"");
                }
                level
            }
        };
        Self {
            pin: opts.pin,
            level,
        }
    }
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    let path = Path::new(".env");
    if path.exists() {
        dotenvy::from_path(path)?;
    }

    let log_level_str = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?
        .add_directive(format!("rpi_gpio={log_level_str}").parse()?)
        .add_directive(format!("set_pin={log_level_str}").parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    debug!("Using log level: {log_level_str}");
    Ok(())
}

// The header pin is checked before the port is opened so a bad pin isn't
// reported as a board problem.
fn run<P, F>(config: Config, open: F) -> Result<(), PinError>
where
    P: GpioPort,
    F: FnOnce() -> Result<PinController<P>, PinError>,
{
    board::to_bcm(config.pin)
        .inspect_err(|e| error!("Failed to set pin {}: {e}", config.pin))?;
    let controller = open().inspect_err(|e| error!("Failed to open GPIO: {e}"))?;
    controller
        .set_pin(config.pin, config.level)
        .inspect_err(|e| error!("Failed to set pin {}: {e}", config.pin))
}

fn main() -> Result<(), Box<dyn Error>> {
    let opts = Opts::parse();
    init_logging()?;

    let config = Config::from(opts);
    debug!("{config:?}");

    run(config, PinController::open)?;
    Ok(())
}
