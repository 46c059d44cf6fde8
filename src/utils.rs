use std::ffi::OsString;

use avrfuse::{Destination, FuseParams};
use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::err::CliError;

/// Write fuse config for programming with avrdude.
#[derive(Parser, Debug)]
#[command(name = "gen-fuses", author, version, about, long_about = None)]
#[command(args_override_self = true)]
struct Cli {
    #[command(flatten)]
    args: FuseArgs,
}

#[derive(clap::Args, Debug)]
pub struct FuseArgs {
    /// CPU
    #[arg(long)]
    pub cpu: String,

    /// Low fuses
    #[arg(long)]
    pub lfuse: String,

    /// High fuses
    #[arg(long)]
    pub hfuse: String,

    /// Extended fuses
    #[arg(long)]
    pub efuse: Option<String>,

    /// Output file, or '-' for stdout
    #[arg(long, default_value = "-")]
    pub output: Destination,

    /// Logging level. `Off` for silent operation.
    #[arg(short, long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl FuseArgs {
    pub fn init_logger(&self) {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn params(&self) -> FuseParams {
        let params = FuseParams::new(&self.cpu, &self.lfuse, &self.hfuse);
        match &self.efuse {
            Some(efuse) => params.with_efuse(efuse),
            None => params,
        }
    }
}

/// Parses a full argv, program name first.
///
/// # Errors
///
/// Will return `Err` if a required flag is missing or an argument is malformed.
pub fn parse<I, T>(args: I) -> Result<FuseArgs, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(Cli::try_parse_from(args)?.args)
}
