//! Command-line configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{ArgAction, Parser};

/// An in-memory todo list served as a HAL+JSON API.
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(name = "todo-hal", version, about, long_about = None)]
pub struct Config {
    /// Address to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Allow cross-origin requests
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub cors: bool,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            cors: true,
        }
    }
}
