// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

extern crate proc_macro;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields};

/// How one struct field is addressed in the generated code.
struct FieldInfo {
    /// `self.<access>`
    access: proc_macro2::TokenStream,
    /// Coding path key (field name, or index for tuple structs)
    key: String,
}

/// `#[derive(CdrEncode)]` macro: generates a `cdr_codable::CdrEncode` impl
///
/// Supports:
/// - Structs with named fields: encoded through a keyed container, in
///   declaration order
/// - Tuple structs: same, keyed `"0"`, `"1"`, ...
/// - Unit structs: nothing written
/// - Field-less enums: discriminant as `u32` (declaration index unless set
///   explicitly); a discriminant outside `u32` fails the encode
///
/// Fields marked `#[cdr(skip)]` are not encoded. Every type parameter gets a
/// `CdrEncode` bound.
///
/// Example:
/// ```ignore
/// use cdr_codable::CdrEncode;
///
/// #[derive(CdrEncode)]
/// struct ImageMeta {
///     image_id: u32,
///     width: u16,
///     height: u16,
///     format: String,
///     data: Vec<u8>,
///     #[cdr(skip)]
///     cached_hash: u64,
/// }
/// ```
#[proc_macro_derive(CdrEncode, attributes(cdr))]
pub fn derive_cdr_encode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::cdr_codable::CdrEncode));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let body = match &input.data {
        Data::Struct(data) => encode_struct_body(&data.fields)?,
        Data::Enum(data) => {
            let mut arms = Vec::with_capacity(data.variants.len());
            for variant in &data.variants {
                if !matches!(variant.fields, Fields::Unit) {
                    return Err(syn::Error::new_spanned(
                        variant,
                        "Only field-less enum variants are supported",
                    ));
                }
                let ident = &variant.ident;
                arms.push(quote! { Self::#ident => Self::#ident as i128, });
            }
            if arms.is_empty() {
                return Err(syn::Error::new_spanned(
                    input,
                    "Enums without variants cannot be encoded",
                ));
            }
            let name_str = name.to_string();
            quote! {
                let discriminant: i128 = match self {
                    #(#arms)*
                };
                let Ok(value) = u32::try_from(discriminant) else {
                    return Err(::cdr_codable::CdrError::custom(
                        format!("{} discriminant {} does not fit in u32", #name_str, discriminant),
                        encoder.coding_path(),
                    ));
                };
                encoder.single_value_container().encode_u32(value)
            }
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Only structs and field-less enums are supported",
            ))
        }
    };

    Ok(quote! {
        impl #impl_generics ::cdr_codable::CdrEncode for #name #ty_generics #where_clause {
            fn encode(
                &self,
                encoder: &mut ::cdr_codable::Encoder<'_>,
            ) -> ::cdr_codable::Result<()> {
                #body
            }
        }
    })
}

/// Generate the keyed-container calls for a struct's fields
fn encode_struct_body(fields: &Fields) -> syn::Result<proc_macro2::TokenStream> {
    let mut infos = Vec::new();

    match fields {
        Fields::Named(named) => {
            for field in &named.named {
                if is_skipped(&field.attrs)? {
                    continue;
                }
                let Some(ident) = field.ident.as_ref() else {
                    return Err(syn::Error::new_spanned(field, "Field must have a name"));
                };
                infos.push(FieldInfo {
                    access: quote! { #ident },
                    key: ident.to_string(),
                });
            }
        }
        Fields::Unnamed(unnamed) => {
            for (idx, field) in unnamed.unnamed.iter().enumerate() {
                if is_skipped(&field.attrs)? {
                    continue;
                }
                let index = syn::Index::from(idx);
                infos.push(FieldInfo {
                    access: quote! { #index },
                    key: idx.to_string(),
                });
            }
        }
        Fields::Unit => {}
    }

    if infos.is_empty() {
        return Ok(quote! {
            let _ = encoder;
            Ok(())
        });
    }

    let encode_fields = infos.iter().map(|f| {
        let access = &f.access;
        let key = &f.key;
        quote! {
            container.encode(#key, &self.#access)?;
        }
    });

    Ok(quote! {
        let mut container = encoder.keyed_container();
        #(#encode_fields)*
        Ok(())
    })
}

/// `true` when the field carries `#[cdr(skip)]`
fn is_skipped(attrs: &[syn::Attribute]) -> syn::Result<bool> {
    let mut skip = false;
    for attr in attrs {
        if !attr.path().is_ident("cdr") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unsupported cdr attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}
