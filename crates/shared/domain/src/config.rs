use crate::style::StyleConfig;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level site configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub server: ServerConfig,
    pub content: ContentConfig,
    pub logging: LoggingConfig,
    pub style: StyleConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into handlers.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub ssl: Option<SslConfig>,
    /// Upper bound for draining in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Where the site's files live. Relative directories resolve against `root`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub root: PathBuf,
    pub posts_dir: PathBuf,
    pub projects_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub assets_dir: PathBuf,
}

/// Logging knobs, forwarded to the logger builder by the binaries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `off`, `compact`, `pretty` or `json`.
    pub console: String,
    pub filter: Option<String>,
    pub dir: Option<PathBuf>,
    pub json_file: bool,
}

impl ContentConfig {
    #[must_use]
    pub fn posts_path(&self) -> PathBuf {
        self.root.join(&self.posts_dir)
    }

    #[must_use]
    pub fn projects_path(&self) -> PathBuf {
        self.root.join(&self.projects_dir)
    }

    #[must_use]
    pub fn templates_path(&self) -> PathBuf {
        self.root.join(&self.templates_dir)
    }

    #[must_use]
    pub fn assets_path(&self) -> PathBuf {
        self.root.join(&self.assets_dir)
    }
}

// --- Default ---

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            ssl: None,
            shutdown_timeout_secs: 30,
        }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            posts_dir: PathBuf::from("posts"),
            projects_dir: PathBuf::from("projects"),
            templates_dir: PathBuf::from("templates"),
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            console: "compact".to_owned(),
            filter: None,
            dir: None,
            json_file: false,
        }
    }
}
