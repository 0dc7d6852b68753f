use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Runtime configuration for the upload server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory receiving uploaded images (default: "uploads")
    pub upload_dir: PathBuf,

    /// Interface to bind (default: 0.0.0.0)
    pub host: IpAddr,

    /// Port to listen on (default: 3000)
    pub port: u16,

    /// Maximum request body size in bytes (default: 50 MB)
    pub max_file_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            max_file_size: 50 * 1024 * 1024, // 50 MB
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            upload_dir: env::var("UPLOAD_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(default.upload_dir),

            host: env::var("HOST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.host),

            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),

            max_file_size: env::var("MAX_FILE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_file_size),
        }
    }

    /// Config rooted at an arbitrary directory, used by tests and tooling
    pub fn with_upload_dir(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            ..Self::default()
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
