//! Attribute parsing for the `EnvConfig` derive.
//!
//! All metadata lives in `#[envstruct(...)]` attributes. Unknown keys are
//! rejected so that a misspelt `default` does not silently drop a value.

use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Lit, LitStr};

#[derive(Default)]
pub(crate) struct StructAttrs {
    pub prefix: Option<LitStr>,
    /// Path used in place of `envstruct` in generated code.
    pub crate_path: Option<syn::Path>,
}

#[derive(Default)]
pub(crate) struct FieldAttrs {
    pub skip: bool,
    pub default: Option<LitStr>,
}

/// One named field of the input struct.
pub(crate) struct FieldSpec {
    pub ident: Ident,
    /// Identifier without any `r#` marker; the environment key derives from it.
    pub name: String,
    pub attrs: FieldAttrs,
}

pub(crate) struct ParsedInput {
    pub struct_attrs: StructAttrs,
    pub fields: Vec<FieldSpec>,
}

/// Calls `f` for every key inside every `#[envstruct(...)]` attribute.
fn for_each_key<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("envstruct")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string literal"),
        )),
    }
}

fn unknown_key(meta: &ParseNestedMeta, allowed: &str) -> syn::Error {
    meta.error(format!("unknown envstruct attribute; expected {allowed}"))
}

pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    for_each_key(attrs, |meta| {
        if meta.path.is_ident("prefix") {
            out.prefix = Some(lit_str(meta, "prefix")?);
            Ok(())
        } else if meta.path.is_ident("crate") {
            out.crate_path = Some(lit_str(meta, "crate")?.parse()?);
            Ok(())
        } else {
            Err(unknown_key(meta, "`prefix` or `crate`"))
        }
    })?;
    Ok(out)
}

pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for_each_key(attrs, |meta| {
        if meta.path.is_ident("skip") {
            out.skip = true;
            Ok(())
        } else if meta.path.is_ident("default") {
            out.default = Some(lit_str(meta, "default")?);
            Ok(())
        } else {
            Err(unknown_key(meta, "`skip` or `default`"))
        }
    })?;
    Ok(out)
}

/// Collects struct attributes and named fields, rejecting other shapes.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<ParsedInput> {
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unit => {
                return Ok(ParsedInput {
                    struct_attrs,
                    fields: Vec::new(),
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "EnvConfig requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "EnvConfig can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        fields.push(FieldSpec {
            name: ident.unraw().to_string(),
            ident,
            attrs: parse_field_attrs(&field.attrs)?,
        });
    }
    Ok(ParsedInput {
        struct_attrs,
        fields,
    })
}
