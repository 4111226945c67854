//! Configuration loading from environment and command line.

use std::env;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Loads `HOST` and `PORT` from the environment, then applies a
    /// `--port <n>` argument if one is given.
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("PORT").ok();
        let config = Self::from_parts(&host, port.as_deref())?;
        config.with_args(env::args().skip(1))
    }

    fn from_parts(host: &str, port: Option<&str>) -> anyhow::Result<Self> {
        let host = host
            .parse::<IpAddr>()
            .map_err(|e| anyhow::anyhow!("invalid HOST {:?}: {}", host, e))?;
        let port = match port {
            Some(p) => p
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid PORT {:?}: {}", p, e))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    fn with_args<I>(mut self, args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            if arg == "--port" {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--port requires a value"))?;
                self.port = value
                    .parse::<u16>()
                    .map_err(|e| anyhow::anyhow!("invalid --port {:?}: {}", value, e))?;
            }
        }
        Ok(self)
    }

    /// Socket address to bind.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
