use super::{StyleError, StyleErrorExt};
use folio_domain::constants::default_font_stack;
use folio_domain::style::StyleConfig;
use std::fmt;

const INDENT: &str = "  ";

/// Renders the record as the CommonJS module the generator loads
/// (`tailwind.config.cjs`).
///
/// Each extended font role is written as its declared fonts followed by a
/// spread of the generator's own default stack for that role, so the
/// generator performs the same prepend that [`StyleConfig::font_stack`]
/// describes.
#[derive(Debug, Clone, Copy)]
pub struct ModuleExport<'a>(pub &'a StyleConfig);

impl fmt::Display for ModuleExport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = self.0;

        writeln!(f, "/** @type {{import('tailwindcss').Config}} */")?;
        writeln!(f, "const defaultTheme = require('tailwindcss/defaultTheme')")?;
        writeln!(f)?;
        writeln!(f, "module.exports = {{")?;

        let content: Vec<String> = style.content.iter().map(String::as_str).map(js_string).collect();
        writeln!(f, "{INDENT}content: [{}],", content.join(", "))?;

        writeln!(f, "{INDENT}theme: {{")?;
        writeln!(f, "{INDENT}{INDENT}extend: {{")?;
        writeln!(f, "{INDENT}{INDENT}{INDENT}fontFamily: {{")?;
        for (role, fonts) in &style.theme.extend.font_family {
            let mut entries: Vec<String> = fonts.iter().map(|name| js_string(&css_font_name(name))).collect();
            if default_font_stack(role).is_some() {
                entries.push(format!("...defaultTheme.fontFamily.{role}"));
            }
            writeln!(f, "{INDENT}{INDENT}{INDENT}{INDENT}{}: [{}],", js_string(role), entries.join(", "))?;
        }
        writeln!(f, "{INDENT}{INDENT}{INDENT}}},")?;
        writeln!(f, "{INDENT}{INDENT}}},")?;
        writeln!(f, "{INDENT}}},")?;

        let plugins: Vec<String> =
            style.plugins.iter().map(|p| format!("require({})", js_string(p))).collect();
        writeln!(f, "{INDENT}plugins: [{}],", plugins.join(", "))?;

        writeln!(f, "}}")
    }
}

#[must_use]
pub fn export_module(style: &StyleConfig) -> String {
    ModuleExport(style).to_string()
}

/// Pretty JSON of the record, with the generator's key names.
///
/// # Errors
/// [`StyleError::Serialize`] if serialization fails.
pub fn export_json(style: &StyleConfig) -> Result<String, StyleError> {
    serde_json::to_string_pretty(style).context("Serializing style record")
}

/// Multi-word family names must be quoted in CSS; generic names must not.
fn css_font_name(name: &str) -> String {
    let trimmed = name.trim();
    let already_quoted = trimmed.len() >= 2
        && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
            || (trimmed.starts_with('\'') && trimmed.ends_with('\'')));

    if !already_quoted && trimmed.chars().any(char::is_whitespace) {
        format!("\"{trimmed}\"")
    } else {
        trimmed.to_owned()
    }
}

fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}
