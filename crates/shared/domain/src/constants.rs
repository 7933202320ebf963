/// Request header htmx sets on every request it issues.
pub const HX_REQUEST: &str = "HX-Request";

/// Section the page shell loads when none is requested.
pub const DEFAULT_START_LINK: &str = "/posts";

/// Name of the index file inside the posts and projects directories.
pub const INDEX_FILE: &str = "index.json";

/// Environment prefix for configuration overrides (`FOLIO__SERVER__PORT`).
pub const ENV_PREFIX: &str = "FOLIO";

/// Font preferred by the site's sans-serif stack.
pub const BRAND_FONT: &str = "Chakra Petch";

/// Generator defaults for the `sans` role, lowest precedence last.
pub const DEFAULT_SANS: &[&str] = &[
    "ui-sans-serif",
    "system-ui",
    "sans-serif",
    "Apple Color Emoji",
    "Segoe UI Emoji",
    "Segoe UI Symbol",
    "Noto Color Emoji",
];

pub const DEFAULT_SERIF: &[&str] =
    &["ui-serif", "Georgia", "Cambria", "Times New Roman", "Times", "serif"];

pub const DEFAULT_MONO: &[&str] = &[
    "ui-monospace",
    "SFMono-Regular",
    "Menlo",
    "Monaco",
    "Consolas",
    "Liberation Mono",
    "Courier New",
    "monospace",
];

/// Default font stack of a role, if the generator defines one.
#[must_use]
pub fn default_font_stack(role: &str) -> Option<&'static [&'static str]> {
    match role {
        "sans" => Some(DEFAULT_SANS),
        "serif" => Some(DEFAULT_SERIF),
        "mono" => Some(DEFAULT_MONO),
        _ => None,
    }
}
