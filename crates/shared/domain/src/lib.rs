//! # Domain Models
//!
//! Plain data shared by every Folio crate: the site configuration, the style
//! configuration handed to the utility-class generator, and the content index
//! records. Only `serde` is allowed here; no I/O, networking or rendering.

pub mod config;
pub mod constants;
pub mod content;
pub mod style;
