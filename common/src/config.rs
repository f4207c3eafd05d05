use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080);

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub addr: SocketAddr,
    /// JSON dataset to load instead of the built-in one.
    ///
    /// Loaded once at startup and never reloaded.
    pub dataset: Option<PathBuf>,
    /// Number of `-v` flags given on the command line.
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            dataset: None,
            verbosity: 0,
        }
    }
}
