use config::{Config, Environment, File};
use folio_domain::constants::ENV_PREFIX;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "folio";

#[folio_derive::folio_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration file and overlays `FOLIO__`-prefixed environment variables.
///
/// Layering:
/// 1. **Base file**: `path`, or `folio` in the working directory. Without an
///    extension the `config` crate probes the formats it knows (`folio.toml`,
///    `folio.yaml`, `folio.json`, ...). The file is required.
/// 2. **Environment**: `FOLIO__SERVER__PORT=8080` maps to `server.port`.
///    Values that parse as numbers or booleans are typed before deserializing.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is missing, unparsable, or its
/// content does not match `T`.
///
/// # Example
/// ```rust
/// use folio_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        );

    info!(path = %effective_path.display(), "Loading config");

    let config = builder
        .build()
        .context(format!("Failed to read {}", effective_path.display()))?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
