use anyhow::Context;
use folio_kernel::config::load_config;
use folio_kernel::domain::config::SiteConfig;
use folio_server::{Server, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: SiteConfig = load_config(std::env::args_os().nth(1))
        .context("Critical: Configuration is malformed")?;

    let _log = init_logger(env!("CARGO_PKG_NAME"), &cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}
