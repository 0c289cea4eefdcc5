//! Procedural macros for `envstruct`.
//!
//! `#[derive(EnvConfig)]` implements `envstruct::EnvConfig` for a struct with
//! named fields by generating its field descriptor table. Fields are listed
//! in declaration order and configured with `#[envstruct(...)]`:
//!
//! - `skip` leaves the field out of the table, so it keeps its `Default`
//!   value and its type need not be loadable.
//! - `default = "..."` supplies the raw value used when the variable is
//!   absent or empty. An empty literal means no default.
//!
//! On the struct itself, `prefix = "..."` sets the prefix used by
//! `envstruct::load_envs` and `crate = "..."` names the runtime crate when it
//! has been renamed.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `envstruct::EnvConfig`.
#[proc_macro_derive(EnvConfig, attributes(envstruct))]
pub fn derive_env_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
