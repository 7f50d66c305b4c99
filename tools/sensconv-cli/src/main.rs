//! sensconv CLI — convert mouse sensitivity between platforms.
//!
//! Usage:
//!   sensconv <SOURCE> <TARGET> <VALUE>
//!
//! `SOURCE`/`TARGET` are `windows` or `kde`. `VALUE` is a slider tick for
//! Windows and a pointer-acceleration value for KDE.

use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use sensconv_common::{logging, AppConfig};
use sensconv_converter::platform::Platform;

mod convert;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PlatformArg {
    /// Windows pointer-speed slider tick (1-20)
    Windows,
    /// KDE Plasma pointer acceleration (-1.0 to 1.0)
    Kde,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Windows => Platform::Windows,
            PlatformArg::Kde => Platform::Kde,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "sensconv",
    about = "Convert mouse sensitivity between platforms",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Source platform
    #[arg(value_enum, ignore_case = true)]
    source: PlatformArg,

    /// Target platform
    #[arg(value_enum, ignore_case = true)]
    target: PlatformArg,

    /// Sensitivity value (tick for Windows, float for KDE)
    #[arg(allow_negative_numbers = true)]
    value: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = AppConfig::load();
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    logging::init_logging(&config.logging);
    if let Err(e) = &loaded {
        tracing::warn!("Ignoring config file: {e}");
    }

    match convert::run(cli.source.into(), cli.target.into(), &cli.value) {
        Ok(line) => {
            println!("{line}");
            Ok(())
        }
        Err(e) if e.is_usage_error() => Cli::command().error(ErrorKind::ValueValidation, e).exit(),
        Err(e) => Err(e.into()),
    }
}
