//! # Folio Server
//!
//! Serves the site over HTTP or HTTPS with `Axum`: htmx page fragments,
//! the full-document shell, static assets and a health probe.
//!
//! ## Example
//! ```no_run
//! use folio_server::Server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Server::builder()
//!         .port(3000)
//!         .build()?
//!         .run()
//!         .await
//! }
//! ```

mod logging;
pub mod router;

pub use logging::init_logger;

use anyhow::{Context, Result};
use axum_server::Handle;
use axum_server::tls_rustls::RustlsConfig;
use folio_kernel::domain::config::SiteConfig;
use folio_kernel::server::AppState;
use folio_kernel::style;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{debug, error, info, warn};

/// Collects the site configuration and turns it into a ready [`Server`].
#[must_use = "call .build() to get a Server"]
#[derive(Debug, Default)]
pub struct ServerBuilder {
    cfg: SiteConfig,
}

impl ServerBuilder {
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Overrides `server.port`.
    pub fn port(mut self, port: u16) -> Self {
        self.cfg.server.port = port;
        self
    }

    fn check_tls_files(&self) -> Result<()> {
        let Some(tls) = &self.cfg.server.ssl else {
            return Ok(());
        };

        for (what, path) in [("certificate", &tls.cert), ("key", &tls.key)] {
            if !path.is_file() {
                anyhow::bail!("SSL {what} not found at: {}", path.display());
            }
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = tls.key.metadata()?.permissions().mode();
            if mode & 0o077 != 0 {
                warn!(
                    key = %tls.key.display(),
                    mode = %format_args!("{mode:o}"),
                    "TLS key is readable by group or others"
                );
            }
        }
        Ok(())
    }

    /// Checks everything the site needs before binding a socket: TLS files
    /// (when configured), the style record and every page template.
    ///
    /// # Errors
    /// Missing TLS files, an invalid style record, or a missing or broken
    /// templates directory.
    pub fn build(self) -> Result<Server> {
        self.check_tls_files()?;

        style::validate(&self.cfg.style).context("Style configuration is invalid")?;

        let assets = self.cfg.content.assets_path();
        if !assets.is_dir() {
            warn!(path = %assets.display(), "Assets directory missing, /assets will return 404");
        }

        let state = AppState::builder()
            .config(self.cfg)
            .build()
            .context("Failed to load the site")?;

        debug!(templates = %state.renderer.dir().display(), "Site loaded");
        Ok(Server { state })
    }
}

/// A site whose templates and config are loaded; `run` serves it.
#[must_use = "call .run().await to serve the site"]
#[derive(Debug)]
pub struct Server {
    state: AppState,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    /// Serves the site until Ctrl+C or SIGTERM, then drains open requests for
    /// at most `server.shutdown_timeout_secs`.
    ///
    /// # Errors
    /// Binding the address or loading the TLS certificates fails.
    pub async fn run(self) -> Result<()> {
        let server_cfg = self.state.config.server.clone();
        let address = SocketAddr::new(server_cfg.address, server_cfg.port);
        let drain = Duration::from_secs(server_cfg.shutdown_timeout_secs);
        let app = router::init(self.state).into_make_service();

        let handle = Handle::<SocketAddr>::new();
        tokio::spawn(stop_on_signal(handle.clone(), drain));

        match &server_cfg.ssl {
            Some(tls) => {
                let tls_config = RustlsConfig::from_pem_file(&tls.cert, &tls.key)
                    .await
                    .context("Failed to load TLS certificate or key")?;

                info!("Serving Folio on https://{address}");
                axum_server::bind_rustls(address, tls_config)
                    .handle(handle)
                    .serve(app)
                    .await
                    .with_context(|| format!("HTTPS listener on {address} failed"))?;
            },
            None => {
                info!("Serving Folio on http://{address}");
                axum_server::bind(address)
                    .handle(handle)
                    .serve(app)
                    .await
                    .with_context(|| format!("HTTP listener on {address} failed"))?;
            },
        }

        info!("Folio stopped");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }
}

async fn stop_on_signal(handle: Handle<SocketAddr>, drain: Duration) {
    match wait_for_signal().await {
        Ok(()) => {
            info!(drain_secs = drain.as_secs(), "Stopping, draining open requests");
            handle.graceful_shutdown(Some(drain));
        },
        Err(e) => error!("Signal handler failed, graceful shutdown disabled: {e:#}"),
    }
}

async fn wait_for_signal() -> Result<()> {
    #[cfg(unix)]
    {
        let mut term = signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Installing SIGTERM handler")?;
        tokio::select! {
            res = signal::ctrl_c() => res.context("Waiting for Ctrl+C")?,
            _ = term.recv() => {},
        }
    }

    #[cfg(not(unix))]
    signal::ctrl_c().await.context("Waiting for Ctrl+C")?;

    Ok(())
}
