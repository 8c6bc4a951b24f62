use clap::Parser;
use error_stack::{Result, ResultExt};
use thiserror::Error;

mod check;
mod serve;

/// Command line options for credshape.
#[derive(Debug, Parser)]
#[command(
    about = "Credential form validator for authentication endpoints",
    version,
    author,
    long_about
)]
pub struct Cli {
    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(Debug, Error)]
#[error("credshape failed to run")]
pub struct CliError;

impl Cli {
    pub fn run(self) -> Result<(), CliError> {
        match self.subcommand {
            Subcommand::Serve(args) => self::serve::run(&args).change_context(CliError),
            Subcommand::Check(args) => self::check::run(&args).change_context(CliError),
        }
    }
}

#[derive(Debug, Parser)]
pub enum Subcommand {
    Serve(self::serve::ServeCommand),
    Check(self::check::CheckCommand),
}
