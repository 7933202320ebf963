use anyhow::Result;
use folio_kernel::domain::config::SiteConfig;
use folio_server::{Server, init_logger};

pub(crate) async fn run(cfg: SiteConfig, port: Option<u16>) -> Result<()> {
    let _log = init_logger(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    let mut builder = Server::builder().config(cfg);
    if let Some(port) = port {
        builder = builder.port(port);
    }

    builder.build()?.run().await
}
