use anyhow::{Context, Result};
use folio_kernel::domain::config::LoggingConfig;
use folio_logger::{ConsoleFormat, LevelFilter, Logger};

/// Installs the global logger from the `[logging]` config section.
///
/// # Errors
/// Fails on an unknown level or console format, bad filter directives, an
/// unwritable log directory, or if a logger is already installed.
pub fn init_logger(name: &str, cfg: &LoggingConfig) -> Result<Logger> {
    let level: LevelFilter =
        cfg.level.parse().with_context(|| format!("Invalid logging.level '{}'", cfg.level))?;
    let console: ConsoleFormat = cfg.console.parse().context("Invalid logging.console")?;

    let mut builder = Logger::builder().name(name).level(level).console_format(console);
    if let Some(filter) = &cfg.filter {
        builder = builder.env_filter(filter);
    }

    let logger = match &cfg.dir {
        Some(dir) if cfg.json_file => builder.path(dir).json().init(),
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    };

    logger.context("Failed to initialize logging")
}
