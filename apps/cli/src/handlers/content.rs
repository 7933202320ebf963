use super::command_logger;
use anyhow::Result;
use folio_kernel::content::{ContentError, ContentStore};
use folio_kernel::domain::config::SiteConfig;
use std::collections::HashSet;
use tracing::warn;

pub(crate) fn check(cfg: &SiteConfig) -> Result<()> {
    let _log = command_logger(&cfg.logging, false)?;
    let store = ContentStore::from_config(&cfg.content);

    let post_ids = store.post_entries().map(|entries| entries.into_iter().map(|e| e.id).collect());
    let project_ids =
        store.project_entries().map(|entries| entries.into_iter().map(|e| e.id).collect());

    let failures = check_kind("post", post_ids, |id| store.post(id).map(drop))
        + check_kind("project", project_ids, |id| store.project(id).map(drop));

    if failures > 0 {
        anyhow::bail!("{failures} content check(s) failed");
    }
    println!("All content OK");
    Ok(())
}

/// Loads every entry of one index; returns the number of failures.
fn check_kind(
    kind: &str,
    ids: Result<Vec<String>, ContentError>,
    load: impl Fn(&str) -> Result<(), ContentError>,
) -> usize {
    let ids = match ids {
        Ok(ids) => ids,
        Err(e) => {
            println!("FAIL  {kind} index: {e}");
            return 1;
        },
    };

    let mut seen = HashSet::new();
    let mut failures = 0;
    for id in &ids {
        if !seen.insert(id.as_str()) {
            warn!(kind, id = %id, "Duplicate id, only the first entry is reachable");
            println!("FAIL  {kind} {id}: duplicate id");
            failures += 1;
            continue;
        }

        match load(id) {
            Ok(()) => println!("ok    {kind} {id}"),
            Err(e) => {
                println!("FAIL  {kind} {id}: {e}");
                failures += 1;
            },
        }
    }
    failures
}
