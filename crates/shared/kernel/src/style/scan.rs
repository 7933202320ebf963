use super::{StyleError, StyleErrorExt};
use folio_domain::style::StyleConfig;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Resolves every `content` glob against `root` and returns the matched files,
/// sorted and de-duplicated.
///
/// A pattern that matches nothing only logs a warning: the generator treats it
/// the same way, and a fresh checkout may not have every directory yet.
///
/// # Errors
/// * [`StyleError::Invalid`] if `root` is not valid UTF-8.
/// * [`StyleError::Pattern`] for a malformed pattern.
/// * [`StyleError::Scan`] if a matched path cannot be read.
pub fn scan(style: &StyleConfig, root: &Path) -> Result<Vec<PathBuf>, StyleError> {
    let root_str = root.to_str().ok_or_else(|| StyleError::Invalid {
        message: format!("project root is not valid UTF-8: {}", root.display()).into(),
        context: None,
    })?;
    let escaped_root = glob::Pattern::escape(root_str);

    let mut files = BTreeSet::new();
    for pattern in &style.content {
        let relative = pattern.trim_start_matches("./");
        let full = format!("{}/{relative}", escaped_root.trim_end_matches('/'));

        let mut matched = 0_usize;
        for entry in glob::glob(&full).context(format!("content pattern '{pattern}'"))? {
            let path = entry.context(format!("content pattern '{pattern}'"))?;
            if path.is_file() {
                matched += 1;
                files.insert(path);
            }
        }

        if matched == 0 {
            warn!(pattern = %pattern, root = %root.display(), "Content pattern matched no files");
        } else {
            debug!(pattern = %pattern, matched, "Content pattern resolved");
        }
    }

    Ok(files.into_iter().collect())
}
