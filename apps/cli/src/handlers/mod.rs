pub(crate) mod content;
pub(crate) mod serve;
pub(crate) mod style;

use crate::args::ConfigArg;
use anyhow::{Context, Result};
use folio_kernel::config::load_config;
use folio_kernel::domain::config::{LoggingConfig, SiteConfig};
use folio_logger::{ConsoleFormat, Logger};

impl ConfigArg {
    pub(crate) fn load(&self) -> Result<SiteConfig> {
        load_config(self.config.as_deref()).context("Critical: Configuration is malformed")
    }
}

/// Logger for one-shot commands. `quiet` keeps stdout clean for piped output.
///
/// Returns `None` when neither the console nor a log directory is enabled.
fn command_logger(cfg: &LoggingConfig, quiet: bool) -> Result<Option<Logger>> {
    let mut logging = cfg.clone();
    if quiet {
        "off".clone_into(&mut logging.console);
    }

    let console: ConsoleFormat = logging.console.parse().context("Invalid logging.console")?;
    if console == ConsoleFormat::Off && logging.dir.is_none() {
        return Ok(None);
    }
    folio_server::init_logger(env!("CARGO_PKG_NAME"), &logging).map(Some)
}
