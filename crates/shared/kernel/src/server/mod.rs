//! HTTP surface of the site: shared state, page handlers and the router.

mod error;
mod health;
mod pages;
pub mod router;
mod state;

pub use error::{ServerError, ServerErrorExt};
pub use state::{AppState, AppStateBuilder, AppStateError, AppStateInner};
