use clap::Parser;
use credshape::{
    auth::Acknowledge,
    config::Server as Config,
    http::{self, StartServerError},
    telemetry, App,
};
use error_stack::{Result, ResultExt};
use std::net::IpAddr;
use std::num::NonZeroUsize;

/// Expose the credential validation HTTP server
#[derive(Debug, Parser)]
pub struct ServeCommand {
    #[clap(long)]
    pub address: Option<IpAddr>,
    #[clap(long)]
    pub port: Option<u16>,
    #[clap(long)]
    pub workers: Option<NonZeroUsize>,
}

pub fn run(args: &ServeCommand) -> Result<(), StartServerError> {
    let mut config = Config::load().change_context(StartServerError)?;
    args.override_config(&mut config);

    telemetry::init(&config.logging).change_context(StartServerError)?;

    let workers = config.workers.get();
    let app = App::new(config, Acknowledge);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(workers)
        .build()
        .change_context(StartServerError)
        .attach_printable("could not build tokio runtime")?
        .block_on(http::run(app))
}

impl ServeCommand {
    fn override_config(&self, config: &mut Config) {
        // override server configurations if set by the cli
        if let Some(address) = self.address {
            config.ip = address;
        }

        if let Some(port) = self.port {
            config.port = port;
        }

        if let Some(workers) = self.workers {
            config.workers = workers;
        }
    }
}
