#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for the Folio workspace.
//!
//! Currently a single attribute, [`macro@folio_error`], which turns a plain enum
//! into a `thiserror` error with context support. Every crate in the workspace
//! defines its error type through it so that `.context(..)` reads the same
//! everywhere.

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Injected items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * A `<Name>Ext<T>` trait with `.context(..)` for `Result<T, Name>` and for
///   `Result<T, Source>` of every variant carrying a `source` field.
/// * `From<Source>` for those variants (context left empty), so `?` works.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, .. }`
///   variant exists.
/// * A private `format_context` helper used inside `#[error(..)]` strings.
///
/// # Requirements
///
/// * Only enums with named-field variants are accepted.
/// * A variant with a `source` (or `#[source]`/`#[from]`) field must also
///   carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[folio_derive::folio_error]
/// pub enum ContentError {
///     #[error("Content I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal content error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read_index(path: &std::path::Path) -> Result<String, ContentError> {
///     std::fs::read_to_string(path).context("Reading post index")
/// }
/// ```
#[proc_macro_attribute]
pub fn folio_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
