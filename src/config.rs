use std::net::SocketAddr;
use std::path::PathBuf;

/// Port the server listens on. Not configurable at runtime.
pub const DEFAULT_PORT: u16 = 8080;

/// Location of the SQLite database file, relative to the working directory.
/// Created on first start if absent.
pub const DEFAULT_DATABASE_PATH: &str = "test.db";

/// Service configuration, constructed once at startup and handed to the
/// components that need it. The port and storage path are fixed constants;
/// no environment variables are consulted.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub database_path: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        Config {
            port: DEFAULT_PORT,
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
        }
    }

    /// Socket address the server binds to (all interfaces).
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
