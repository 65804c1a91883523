//! Derive macros for binding named queries to struct fields.
//!
//! This crate provides the `#[derive(FromQueries)]` macro, which generates
//! an `oxide_yesql::FromQueries` impl from per-field `#[query]` attributes.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, Meta, Type, parse_macro_input};

/// Derives `FromQueries` for a struct with named fields.
///
/// # Field Attributes
///
/// - `#[query("name")]` - Binds the field to the query declared with
///   `-- name: name`
/// - `#[query(name = "name")]` - Same as above
/// - `#[query(skip)]` - Leaves the field at `Default::default()`
///
/// Fields without a `#[query]` attribute are also filled with
/// `Default::default()`. Bound fields must implement `FromQuery`.
///
/// # Generated Items
///
/// - `QUERY_NAMES` listing every bound name once, in field order
/// - `from_queries`, failing with `QueryNotFound` on the first missing name
#[proc_macro_derive(FromQueries, attributes(query))]
pub fn derive_from_queries(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive_from_queries_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn derive_from_queries_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "FromQueries derive only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "FromQueries derive only supports structs",
            ));
        }
    };

    let mut field_infos: Vec<FieldInfo> = Vec::new();
    for field in fields {
        let Some(field_name) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let binding = parse_query_attr(&field.attrs)?;
        field_infos.push(FieldInfo {
            field_name,
            field_type: field.ty.clone(),
            binding,
        });
    }

    // Each name once, in first-use order; several fields may share a query.
    let mut query_names: Vec<&LitStr> = Vec::new();
    for info in &field_infos {
        if let Binding::Query(name) = &info.binding {
            if !query_names.iter().any(|seen| seen.value() == name.value()) {
                query_names.push(name);
            }
        }
    }

    let field_inits: Vec<TokenStream2> = field_infos
        .iter()
        .map(|info| {
            let field_name = &info.field_name;
            let field_type = &info.field_type;
            match &info.binding {
                Binding::Query(name) => quote! {
                    #field_name: <#field_type as ::oxide_yesql::FromQuery>::from_query(
                        #name,
                        queries.require(#name)?,
                    )?
                },
                Binding::Default => quote! {
                    #field_name: ::core::default::Default::default()
                },
            }
        })
        .collect();

    let expanded = quote! {
        impl #impl_generics ::oxide_yesql::FromQueries for #struct_name #ty_generics #where_clause {
            const QUERY_NAMES: &'static [&'static str] = &[#(#query_names),*];

            #[allow(unused_variables)]
            fn from_queries(
                queries: &::oxide_yesql::Queries,
            ) -> ::oxide_yesql::Result<Self> {
                ::core::result::Result::Ok(Self {
                    #(#field_inits),*
                })
            }
        }
    };

    Ok(expanded)
}

struct FieldInfo {
    field_name: Ident,
    field_type: Type,
    binding: Binding,
}

enum Binding {
    Query(LitStr),
    Default,
}

fn parse_query_attr(attrs: &[Attribute]) -> syn::Result<Binding> {
    let mut binding = Binding::Default;

    for attr in attrs {
        if !attr.path().is_ident("query") {
            continue;
        }
        if matches!(attr.meta, Meta::Path(_)) {
            return Err(syn::Error::new_spanned(
                attr,
                "expected #[query(\"name\")], #[query(name = \"...\")] or #[query(skip)]",
            ));
        }

        // #[query("name")]
        if let Ok(name) = attr.parse_args::<LitStr>() {
            binding = Binding::Query(check_name(name)?);
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                binding = Binding::Default;
                Ok(())
            } else if meta.path.is_ident("name") {
                let name: LitStr = meta.value()?.parse()?;
                binding = Binding::Query(check_name(name)?);
                Ok(())
            } else {
                Err(meta.error("unsupported query attribute, expected `name` or `skip`"))
            }
        })?;
    }

    Ok(binding)
}

fn check_name(name: LitStr) -> syn::Result<LitStr> {
    let value = name.value();
    if value.is_empty() || value == "-" {
        return Err(syn::Error::new_spanned(
            &name,
            "query name must not be empty; use #[query(skip)] to leave a field unbound",
        ));
    }
    Ok(name)
}
