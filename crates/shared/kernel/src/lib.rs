//! Kernel services shared by the Folio binaries.
//!
//! * [`config`]: layered configuration loading (file + `FOLIO__` environment).
//! * [`style`]: validation, export and content scanning for the style record.
//! * [`content`]: post/project index access and markdown rendering.
//! * [`render`]: HTML page templates.
//! * `server` (feature `server`): axum state, handlers and the site router.
//!
//! ## Exporting the style record
//! ```rust
//! use folio_kernel::domain::style::StyleConfig;
//! use folio_kernel::style;
//!
//! let cfg = StyleConfig::default();
//! style::validate(&cfg).unwrap();
//! assert!(style::export_module(&cfg).contains(r#"'"Chakra Petch"'"#));
//! ```
pub mod config;
pub mod content;
pub mod prelude;
pub mod render;
#[cfg(feature = "server")]
pub mod server;
pub mod style;

pub use folio_domain as domain;
