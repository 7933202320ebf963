//! Operations on the [`StyleConfig`] record: structural validation, export
//! in the generator's module format, and resolution of the content globs.

mod export;
mod scan;

pub use export::{ModuleExport, export_json, export_module};
pub use scan::scan;

use folio_domain::style::StyleConfig;
use std::borrow::Cow;

#[folio_derive::folio_error]
pub enum StyleError {
    #[error("Invalid style configuration{}: {message}", format_context(.context))]
    Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid glob pattern{}: {source}", format_context(.context))]
    Pattern { source: glob::PatternError, context: Option<Cow<'static, str>> },

    #[error("Unreadable path while scanning{}: {source}", format_context(.context))]
    Scan { source: glob::GlobError, context: Option<Cow<'static, str>> },

    #[error("Style serialization failed{}: {source}", format_context(.context))]
    Serialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

/// Checks the record the way the generator will consume it.
///
/// * `content` lists at least one pattern, and every pattern parses as a glob.
/// * Every extended font role has at least one non-blank font name.
/// * Plugin references are non-blank.
///
/// # Errors
/// [`StyleError::Invalid`] for structural problems, [`StyleError::Pattern`]
/// for a pattern the glob parser rejects.
pub fn validate(style: &StyleConfig) -> Result<(), StyleError> {
    if style.content.is_empty() {
        return Err(StyleError::Invalid {
            message: "content must list at least one glob pattern".into(),
            context: None,
        });
    }

    for pattern in &style.content {
        if pattern.trim().is_empty() {
            return Err(StyleError::Invalid {
                message: "content patterns cannot be blank".into(),
                context: None,
            });
        }
        glob::Pattern::new(pattern).context(format!("content pattern '{pattern}'"))?;
    }

    for (role, fonts) in &style.theme.extend.font_family {
        if fonts.is_empty() {
            return Err(StyleError::Invalid {
                message: format!("font role '{role}' has an empty stack").into(),
                context: Some("theme.extend.fontFamily".into()),
            });
        }
        if fonts.iter().any(|name| name.trim().is_empty()) {
            return Err(StyleError::Invalid {
                message: format!("font role '{role}' contains a blank font name").into(),
                context: Some("theme.extend.fontFamily".into()),
            });
        }
    }

    if style.plugins.iter().any(|plugin| plugin.trim().is_empty()) {
        return Err(StyleError::Invalid {
            message: "plugin references cannot be blank".into(),
            context: Some("plugins".into()),
        });
    }

    Ok(())
}
