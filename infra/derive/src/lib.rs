#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Satchel crates.
//!
//! ## Usage
//! Every crate that defines an error enum depends on this crate directly:
//! ```toml
//! [dependencies]
//! satchel-derive.workspace = true
//! thiserror.workspace = true
//! ```
//!
//! Examples below are `ignore`d because a proc-macro crate cannot expand its own
//! macros; the `tests/ui` cases compile them for real.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// Turns a plain enum with named-field variants into a `thiserror` error with
/// context support and the conversions used by the `?` operator.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` unless already derived.
/// * `<ErrorName>Ext` trait with `.context(..)` and `.with_context(|| ..)` for
///   `Result<T, ErrorName>` and for `Result<T, SourceError>` of every variant
///   that wraps a source.
/// * `From<SourceError>` for every variant with a `source` field.
/// * `From<&'static str>` and `From<String>` targeting the fallback variant.
///   The fallback is `Internal` when such a variant exists, or the variant named
///   by `#[satchel_error(fallback = Variant)]`. It must carry a `message` field.
/// * A module-private `format_context` helper for `#[error(..)]` strings.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Context fields must be typed `Option<Cow<'static, str>>`.
/// 3. Variants with a `source` field must also carry a `context` field.
/// 4. One annotated enum per module, since `format_context` is emitted at module scope.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[satchel_derive::satchel_error(fallback = Invalid)]
/// pub enum ParseError {
///     #[error("IO error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Invalid input{}: {message}", format_context(.context))]
///     Invalid { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(path: &str) -> Result<String, ParseError> {
///     let raw = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
///     if raw.is_empty() {
///         return Err("empty input".into());
///     }
///     Ok(raw)
/// }
/// ```
#[proc_macro_attribute]
pub fn satchel_error(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let mut options = macros::error::ErrorOptions::default();
    let parser = syn::meta::parser(|meta| options.parse(&meta));
    parse_macro_input!(args with parser);
    macros::error::expand_derive(input, &options).into()
}
