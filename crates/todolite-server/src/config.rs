//! Server configuration loaded from `todolite.toml`.

use std::{
    fs,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::Path,
};

use anyhow::{Context, Result};
use serde::Deserialize;

const CONFIG_FILE: &str = "todolite.toml";

/// Address used when neither the config file nor `--addr` supplies one.
pub const DEFAULT_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 3000);

/// Top-level server configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ServerConfig {
    /// `[server]` block.
    #[serde(default)]
    pub server: ServerSection,
}

/// `[server]` configuration block.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    /// Address the HTTP listener binds to.
    #[serde(default = "default_addr")]
    pub addr: SocketAddr,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            addr: default_addr(),
        }
    }
}

const fn default_addr() -> SocketAddr {
    DEFAULT_ADDR
}

impl ServerConfig {
    /// Load configuration from `<dir>/todolite.toml`.
    ///
    /// A missing file yields the defaults; a present but malformed file is an
    /// error.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let config_path = dir.as_ref().join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        Ok(config)
    }
}
