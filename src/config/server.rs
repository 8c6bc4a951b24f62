use error_stack::{Report, Result};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroUsize;

use super::{Logging, ParseError};
use crate::util::figment::FigmentErrorAttachable;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Server {
    #[serde(default = "Server::default_ip")]
    pub ip: IpAddr,
    #[serde(default = "Server::default_port")]
    pub port: u16,
    #[serde(default = "Server::default_workers")]
    pub workers: NonZeroUsize,
    /// Maximum size of a JSON request body in bytes.
    #[serde(default = "Server::default_json_limit")]
    pub json_limit: usize,
    #[serde(default)]
    pub logging: Logging,
}

impl Server {
    pub fn load() -> Result<Self, ParseError> {
        dotenvy::dotenv().ok();

        Self::figment()
            .extract::<Self>()
            .map_err(|e| Report::new(ParseError).attach_figment_error(e))
    }
}

impl Default for Server {
    fn default() -> Self {
        Self {
            ip: Self::default_ip(),
            port: Self::default_port(),
            workers: Self::default_workers(),
            json_limit: Self::default_json_limit(),
            logging: Logging::default(),
        }
    }
}

impl Server {
    const DEFAULT_CONFIG_FILE: &'static str = "credshape.toml";

    fn default_ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    fn default_port() -> u16 {
        3000
    }

    fn default_workers() -> NonZeroUsize {
        NonZeroUsize::MIN
    }

    fn default_json_limit() -> usize {
        16 * 1024
    }

    /// Creates a default [`Figment`] object to load server
    /// configuration. This function is there for testing.
    ///
    /// [`Figment`]: figment::Figment
    pub(crate) fn figment() -> figment::Figment {
        use figment::{
            providers::{Env, Format, Toml},
            Figment,
        };

        Figment::new()
            .merge(Toml::file(Self::DEFAULT_CONFIG_FILE))
            // Environment variable aliases
            .merge(Env::raw().only(&["RUST_LOG"]).map(|_| "logging.targets".into()))
            // Fields with underscores in their names need to be spelled out,
            // everything else is nested by splitting at `_`.
            .merge(Env::prefixed("CREDSHAPE_").map(|v| match v.as_str() {
                "JSON_LIMIT" => "json_limit".into(),
                _ => v.as_str().replace('_', ".").into(),
            }))
    }
}
