use super::command_logger;
use crate::args::ExportFormat;
use anyhow::{Context, Result};
use folio_kernel::domain::config::SiteConfig;
use folio_kernel::style;
use std::fs;
use std::path::Path;
use tracing::info;

pub(crate) fn check(cfg: &SiteConfig) -> Result<()> {
    let _log = command_logger(&cfg.logging, false)?;

    style::validate(&cfg.style).context("Style configuration is invalid")?;
    let files = style::scan(&cfg.style, &cfg.content.root).context("Scanning content globs")?;

    for file in &files {
        println!("{}", file.display());
    }
    println!("{} file(s) matched by {} pattern(s)", files.len(), cfg.style.content.len());

    Ok(())
}

pub(crate) fn export(cfg: &SiteConfig, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let _log = command_logger(&cfg.logging, output.is_none())?;

    style::validate(&cfg.style).context("Style configuration is invalid")?;
    let rendered = match format {
        ExportFormat::Cjs => style::export_module(&cfg.style),
        ExportFormat::Json => style::export_json(&cfg.style)?,
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), format = ?format, "Style record exported");
        },
        None => print!("{rendered}"),
    }

    Ok(())
}
