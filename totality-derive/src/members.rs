//! Implementation of the `#[derive(EnumMembers)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Fields, Ident, parse_macro_input};

const INTEGRAL_REPRS: [&str; 12] = [
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// Main implementation of the `EnumMembers` derive macro.
pub fn derive_enum_members_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "EnumMembers cannot be derived for generic enums.",
        ));
    }

    let data_enum = match &input.data {
        Data::Enum(data_enum) => data_enum,
        Data::Struct(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "EnumMembers can only be derived for enums, not structs.",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                name,
                "EnumMembers cannot be derived for unions.",
            ));
        }
    };

    let repr = integral_repr(&input.attrs)?;
    let variants = unit_variants(data_enum)?;

    Ok(quote! {
        impl ::totality::adapters::EnumMembers for #name {
            type Repr = #repr;

            const MEMBERS: &'static [(#repr, Self)] = &[
                #((Self::#variants as #repr, Self::#variants)),*
            ];
        }
    })
}

/// Finds the integral type named in `#[repr(..)]`, defaulting to `isize`.
fn integral_repr(attributes: &[Attribute]) -> syn::Result<Ident> {
    let mut found: Option<Ident> = None;

    for attribute in attributes.iter().filter(|a| a.path().is_ident("repr")) {
        attribute.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident()
                && INTEGRAL_REPRS.contains(&ident.to_string().as_str())
            {
                found = Some(ident.clone());
            }
            // repr(align(N)) and friends carry a parenthesized payload
            if meta.input.peek(syn::token::Paren) {
                let content;
                syn::parenthesized!(content in meta.input);
                content.parse::<TokenStream2>()?;
            }
            Ok(())
        })?;
    }

    Ok(found.unwrap_or_else(|| Ident::new("isize", proc_macro2::Span::call_site())))
}

fn unit_variants(data_enum: &DataEnum) -> syn::Result<Vec<&Ident>> {
    data_enum
        .variants
        .iter()
        .map(|variant| match variant.fields {
            Fields::Unit => Ok(&variant.ident),
            _ => Err(syn::Error::new_spanned(
                variant,
                "EnumMembers requires every variant to be a unit variant.",
            )),
        })
        .collect()
}
