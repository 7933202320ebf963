pub use crate::config::{ConfigError, load_config};
pub use crate::content::{ContentError, ContentStore};
pub use crate::render::{Page, RenderError, Renderer};
#[cfg(feature = "server")]
pub use crate::server::{AppState, ServerError};
pub use crate::style::StyleError;
pub use folio_domain::config::SiteConfig;
pub use folio_domain::style::StyleConfig;
