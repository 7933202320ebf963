use super::ContentError;
use markdown::{CompileOptions, Options};

/// How much of the markdown source is trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownMode {
    /// Author-owned posts: GFM syntax, with raw HTML (including tags the GFM
    /// tag filter would disarm, such as `<iframe>`) and any link protocol
    /// passed through.
    Trusted,
    /// Plain GFM: raw HTML is escaped, unsafe protocols are dropped.
    Standard,
}

impl MarkdownMode {
    fn options(self) -> Options {
        match self {
            Self::Trusted => Options {
                compile: CompileOptions {
                    allow_dangerous_html: true,
                    allow_dangerous_protocol: true,
                    ..CompileOptions::default()
                },
                ..Options::gfm()
            },
            Self::Standard => Options::gfm(),
        }
    }
}

/// Renders GitHub-flavored markdown to HTML.
///
/// # Errors
/// [`ContentError::Markdown`] if the parser rejects the input.
pub fn render_markdown(source: &str, mode: MarkdownMode) -> Result<String, ContentError> {
    markdown::to_html_with_options(source, &mode.options())
        .map_err(|e| ContentError::Markdown { message: e.to_string().into(), context: None })
}
