//! Expansion of `#[derive(EnvConfig)]`.

mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parses `input` and renders the `EnvConfig` implementation.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::env_config_impl(input, &parsed))
}
