//! Token generation for the `EnvConfig` implementation.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{DeriveInput, Generics, parse_quote};

use super::parse::{FieldSpec, ParsedInput};

/// Resolves the runtime crate path, defaulting to `::envstruct`.
pub(crate) fn crate_path(path: Option<&syn::Path>) -> TokenStream {
    path.map_or_else(|| quote! { ::envstruct }, |p| quote! { #p })
}

/// Renders the descriptor constructor for one field.
///
/// Skipped fields have no descriptor: the loader never touches them, so
/// their types need not be loadable.
pub(crate) fn field_entry(field: &FieldSpec, krate: &TokenStream) -> Option<TokenStream> {
    if field.attrs.skip {
        return None;
    }
    let ident = &field.ident;
    let name = &field.name;
    let default = field
        .attrs
        .default
        .as_ref()
        .map(|lit| quote! { .default(#lit) });
    Some(quote! {
        #krate::Field::new(#name, |cfg: &mut Self| &mut cfg.#ident) #default
    })
}

/// Adds `Self: 'static` to generic inputs; field setters are boxed as
/// `'static` closures over `Self`.
pub(crate) fn bounded_generics(generics: &Generics) -> Generics {
    let mut out = generics.clone();
    if !out.params.is_empty() {
        out.make_where_clause()
            .predicates
            .push(parse_quote!(Self: 'static));
    }
    out
}

pub(crate) fn env_config_impl(input: &DeriveInput, parsed: &ParsedInput) -> TokenStream {
    let ident = &input.ident;
    let generics = bounded_generics(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let krate = crate_path(parsed.struct_attrs.crate_path.as_ref());
    let entries = parsed
        .fields
        .iter()
        .filter_map(|field| field_entry(field, &krate));
    let prefix_fn = parsed.struct_attrs.prefix.as_ref().map(|prefix| {
        quote! {
            fn prefix() -> &'static str {
                #prefix
            }
        }
    });

    quote! {
        impl #impl_generics #krate::EnvConfig for #ident #ty_generics #where_clause {
            fn fields() -> ::std::vec::Vec<#krate::Field<Self>> {
                ::std::vec![#( #entries ),*]
            }

            #prefix_fn
        }
    }
}
