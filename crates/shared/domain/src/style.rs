//! Style configuration consumed by the utility-class CSS generator.
//!
//! The record mirrors the generator's own config object: `content` globs to
//! scan for class names, a `theme.extend` section whose entries are merged with
//! the generator defaults, and a `plugins` list.

use crate::constants::{BRAND_FONT, default_font_stack};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Template glob shipped with the site.
pub const DEFAULT_CONTENT_GLOB: &str = "./templates/*.html";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Glob patterns, relative to the project root, scanned for class usage.
    pub content: Vec<String>,
    pub theme: Theme,
    /// Plugin module references passed through to the generator.
    pub plugins: Vec<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub extend: ThemeExtension,
}

/// Additions merged into the generator's default theme.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeExtension {
    /// Font role (`sans`, `serif`, `mono`, ...) to preferred font names.
    // Layered config sources may hand keys over lowercased.
    #[serde(alias = "fontfamily")]
    pub font_family: BTreeMap<String, Vec<String>>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let mut font_family = BTreeMap::new();
        font_family.insert("sans".to_owned(), vec![BRAND_FONT.to_owned()]);

        Self {
            content: vec![DEFAULT_CONTENT_GLOB.to_owned()],
            theme: Theme { extend: ThemeExtension { font_family } },
            plugins: Vec::new(),
        }
    }
}

impl StyleConfig {
    /// Fonts declared for `role`, without the generator defaults.
    #[must_use]
    pub fn font_extension(&self, role: &str) -> &[String] {
        self.theme.extend.font_family.get(role).map_or(&[], Vec::as_slice)
    }

    /// Effective fallback chain for `role`: the declared fonts first, then the
    /// generator defaults. A name appearing twice keeps its first position.
    #[must_use]
    pub fn font_stack(&self, role: &str) -> Vec<String> {
        let defaults = default_font_stack(role).unwrap_or_default();
        let mut stack: Vec<String> = Vec::with_capacity(self.font_extension(role).len() + defaults.len());

        let candidates =
            self.font_extension(role).iter().map(String::as_str).chain(defaults.iter().copied());
        for name in candidates {
            if !stack.iter().any(|existing| existing == name) {
                stack.push(name.to_owned());
            }
        }
        stack
    }

    /// Font roles the record extends, in key order.
    pub fn font_roles(&self) -> impl Iterator<Item = &str> {
        self.theme.extend.font_family.keys().map(String::as_str)
    }
}
